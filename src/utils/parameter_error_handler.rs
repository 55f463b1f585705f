//! 请求参数解析错误处理
//!
//! 将 actix 的 JSON / Query / Path 解析错误统一转换为 400 `{message, field?}`。

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ErrorResponse;

static FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:missing|unknown|duplicate) field `([^`]+)`").expect("Invalid field regex")
});

/// 从 serde 错误信息中提取字段名
fn extract_field(message: &str) -> Option<String> {
    FIELD_RE
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn bad_request(err: impl std::fmt::Debug + std::fmt::Display + 'static, message: String) -> actix_web::Error {
    let body = match extract_field(&message) {
        Some(field) => ErrorResponse::with_field(field, message),
        None => ErrorResponse::new(message),
    };
    tracing::debug!("Rejected request parameters: {}", body.message);
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        other => format!("Invalid request body: {other}"),
    };
    bad_request(err, message)
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        QueryPayloadError::Deserialize(e) => format!("Invalid query parameters: {e}"),
        other => format!("Invalid query parameters: {other}"),
    };
    bad_request(err, message)
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        PathError::Deserialize(e) => format!("Invalid path parameters: {e}"),
        other => format!("Invalid path parameters: {other}"),
    };
    bad_request(err, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_field_from_serde_messages() {
        assert_eq!(
            extract_field("missing field `rollNo` at line 1 column 20").as_deref(),
            Some("rollNo")
        );
        assert_eq!(
            extract_field("unknown field `foo`, expected one of `name`").as_deref(),
            Some("foo")
        );
        assert_eq!(extract_field("invalid type: string \"a\", expected i32"), None);
    }
}
