use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 名称字段（学年、班级、学生、科目、管理员）的最大长度
pub const MAX_NAME_LENGTH: usize = 100;

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 管理员登录名：邮箱或简单用户名均可（默认管理员为 `admin`）
pub fn validate_login_name(login: &str) -> Result<(), &'static str> {
    if validate_email(login).is_ok() || validate_username(login).is_ok() {
        return Ok(());
    }
    Err("Email must be a valid email address or a 5-16 character username")
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

pub fn validate_roll_no(roll_no: i32) -> Result<(), &'static str> {
    if roll_no < 1 {
        return Err("Roll number must be a positive integer");
    }
    Ok(())
}

pub fn validate_max_marks(max_marks: i32) -> Result<(), &'static str> {
    if max_marks <= 0 {
        return Err("Maximum marks must be greater than 0");
    }
    Ok(())
}

/// 科目日期格式：YYYY-MM-DD
pub fn validate_subject_date(date: &str) -> Result<(), &'static str> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| "Date must be in YYYY-MM-DD format")
}

/// 成绩：非负有限数字
pub fn validate_obtained(obtained: &str) -> Result<f64, &'static str> {
    let value = obtained
        .parse::<f64>()
        .map_err(|_| "Obtained marks must be a number")?;
    if !value.is_finite() || value < 0.0 {
        return Err("Obtained marks must be a non-negative number");
    }
    Ok(value)
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_login_name_accepts_default_admin_and_emails() {
        assert!(validate_login_name("admin").is_ok());
        assert!(validate_login_name("teacher@school.edu").is_ok());
        assert!(validate_login_name("a b").is_err());
        assert!(validate_login_name("").is_err());
    }

    #[test]
    fn test_name_rules() {
        assert!(validate_name("Aakash Yadav").is_ok());
        assert_eq!(validate_name("   "), Err("Name is required"));
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_roll_no_and_max_marks() {
        assert!(validate_roll_no(1).is_ok());
        assert!(validate_roll_no(0).is_err());
        assert!(validate_max_marks(80).is_ok());
        assert!(validate_max_marks(0).is_err());
        assert!(validate_max_marks(-5).is_err());
    }

    #[test]
    fn test_subject_date() {
        assert!(validate_subject_date("2024-07-15").is_ok());
        assert!(validate_subject_date("15/07/2024").is_err());
        assert!(validate_subject_date("2024-02-30").is_err());
    }

    #[test]
    fn test_obtained() {
        assert_eq!(validate_obtained("54"), Ok(54.0));
        assert_eq!(validate_obtained("12.5"), Ok(12.5));
        assert!(validate_obtained("-1").is_err());
        assert!(validate_obtained("abc").is_err());
        assert!(validate_obtained("").is_err());
        assert!(validate_obtained("NaN").is_err());
    }
}
