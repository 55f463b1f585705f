use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;

pub async fn handle_me(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_admin(request) {
        Some(admin) => Ok(HttpResponse::Ok().json(admin)),
        None => Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized"))),
    }
}
