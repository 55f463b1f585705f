use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorResponse;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::services::validation_error_response;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = login_request.validate() {
        return Ok(validation_error_response(e));
    }

    let storage = service.get_storage(request);

    // 1. 根据登录名获取管理员
    let admin = match storage
        .get_admin_by_email(login_request.username.trim())
        .await
    {
        Ok(Some(admin)) => admin,
        Ok(None) => return Ok(invalid_credentials()),
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Login failed")));
        }
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &admin.password) {
        tracing::info!("Failed login attempt for {}", admin.email);
        return Ok(invalid_credentials());
    }

    // 3. 签发会话令牌
    match JwtUtils::generate_session_token(admin.id) {
        Ok(token) => {
            tracing::info!("Admin {} logged in successfully", admin.email);

            let cookie = JwtUtils::create_session_cookie(&token);
            let response = LoginResponse {
                access_token: token,
                expires_in: JwtUtils::session_expiry_seconds(),
                admin,
            };

            Ok(HttpResponse::Ok().cookie(cookie).json(response))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Login failed, unable to generate token")))
        }
    }
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new("Username or password is incorrect"))
}
