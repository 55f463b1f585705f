//! 安全的路径参数提取器
//!
//! 路径中的 ID 解析失败时直接返回 400 `{message, field}`，不进入处理函数。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::ErrorResponse;

fn parse_positive_id(req: &HttpRequest, param: &str, field: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(param).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let body = ErrorResponse::with_field(field, format!("Invalid {field}: {raw}"));
            Err(InternalError::from_response(
                format!("invalid path parameter {param}"),
                HttpResponse::BadRequest().json(body),
            )
            .into())
        }
    }
}

macro_rules! define_safe_id_extractor {
    ($(#[$meta:meta])* $name:ident, $param:literal, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_positive_id(req, $param, $field).map($name))
            }
        }
    };
}

define_safe_id_extractor!(
    /// `{id}` 路径参数
    SafeIDI64,
    "id",
    "id"
);

define_safe_id_extractor!(
    /// `{session_id}` 路径参数
    SafeSessionIdI64,
    "session_id",
    "sessionId"
);
