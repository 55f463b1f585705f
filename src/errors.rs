//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_gradebook_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum GradebookError {
            $($variant(String),)*
        }

        impl GradebookError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GradebookError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GradebookError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GradebookError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GradebookError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GradebookError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gradebook_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UniqueViolation("E004", "Unique Constraint Violation"),
    ForeignKeyViolation("E005", "Foreign Key Constraint Violation"),
    PasswordHash("E006", "Password Hash Error"),
}

impl GradebookError {
    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 将数据库错误按约束类型归类，附带上下文信息
    pub fn from_db(context: &str, err: sea_orm::DbErr) -> Self {
        use sea_orm::SqlErr;

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                GradebookError::UniqueViolation(format!("{context}: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                GradebookError::ForeignKeyViolation(format!("{context}: {detail}"))
            }
            _ => GradebookError::DatabaseOperation(format!("{context}: {err}")),
        }
    }
}

impl fmt::Display for GradebookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GradebookError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for GradebookError {
    fn from(err: sea_orm::DbErr) -> Self {
        GradebookError::from_db("数据库操作失败", err)
    }
}

pub type Result<T> = std::result::Result<T, GradebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GradebookError::database_config("test").code(), "E001");
        assert_eq!(GradebookError::unique_violation("test").code(), "E004");
        assert_eq!(GradebookError::password_hash("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            GradebookError::foreign_key_violation("test").error_type(),
            "Foreign Key Constraint Violation"
        );
    }

    #[test]
    fn test_error_message() {
        let err = GradebookError::database_operation("Student 42");
        assert_eq!(err.message(), "Student 42");
    }

    #[test]
    fn test_format_simple() {
        let err = GradebookError::database_config("Unsupported database URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Database Configuration Error"));
        assert!(formatted.contains("Unsupported database URL"));
    }

    #[test]
    fn test_from_db_without_constraint_is_operation_error() {
        let err = GradebookError::from_db("查询学生失败", sea_orm::DbErr::Custom("boom".into()));
        assert_eq!(err.code(), "E003");
        assert!(err.message().starts_with("查询学生失败"));
    }
}
