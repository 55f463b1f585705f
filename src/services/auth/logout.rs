use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::utils::jwt::JwtUtils;

pub async fn handle_logout(_request: &HttpRequest) -> ActixResult<HttpResponse> {
    // JWT 为无状态令牌，注销即清除 Cookie
    Ok(HttpResponse::NoContent()
        .cookie(JwtUtils::create_empty_session_cookie())
        .finish())
}
