pub mod rate_limit;
pub mod require_jwt;
pub mod require_super_admin;

use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

pub use rate_limit::RateLimit;
pub use require_jwt::RequireJWT;
pub use require_super_admin::RequireSuperAdmin;

use crate::models::ErrorResponse;

// 中间件统一的 JSON 错误响应
pub(crate) fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .json(ErrorResponse::new(message))
}
