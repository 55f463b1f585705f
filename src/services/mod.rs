pub mod admins;
pub mod auth;
pub mod classes;
pub mod leaderboard;
pub mod marks;
pub mod sessions;
pub mod students;
pub mod subjects;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};
use tracing::error;

use crate::errors::GradebookError;
use crate::models::{ErrorResponse, FieldError};
use crate::storage::Storage;

pub use admins::AdminService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use leaderboard::LeaderboardService;
pub use marks::MarkService;
pub use sessions::SessionService;
pub use students::StudentService;
pub use subjects::SubjectService;

// 从 app_data 中取出注入的存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

/// 约束冲突时返回给客户端的字段与提示
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConstraintHints {
    /// 唯一约束冲突 → 409
    pub unique: Option<(&'static str, &'static str)>,
    /// 外键引用不存在 → 400
    pub reference: Option<(&'static str, &'static str)>,
}

pub(crate) fn validation_error_response(err: FieldError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::from(err))
}

pub(crate) fn not_found_response(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(message))
}

/// 存储错误响应：唯一冲突 409，外键缺失 400，其余 500
pub(crate) fn storage_error_response(
    action: &str,
    err: &GradebookError,
    hints: ConstraintHints,
) -> HttpResponse {
    match err {
        GradebookError::UniqueViolation(_) => {
            tracing::info!("{} rejected: {}", action, err);
            let body = match hints.unique {
                Some((field, message)) => ErrorResponse::with_field(field, message),
                None => ErrorResponse::new("Resource already exists"),
            };
            HttpResponse::Conflict().json(body)
        }
        GradebookError::ForeignKeyViolation(_) => {
            tracing::info!("{} rejected: {}", action, err);
            let body = match hints.reference {
                Some((field, message)) => ErrorResponse::with_field(field, message),
                None => ErrorResponse::new("Referenced resource does not exist"),
            };
            HttpResponse::BadRequest().json(body)
        }
        _ => {
            error!("{} failed: {}", action, err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to {action}")))
        }
    }
}
