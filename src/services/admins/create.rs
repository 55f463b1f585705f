use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AdminService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::admins::requests::CreateAdminRequest;
use crate::services::{ConstraintHints, storage_error_response, validation_error_response};
use crate::utils::password::hash_password;

pub async fn create_admin(
    service: &AdminService,
    request: &HttpRequest,
    mut admin_data: CreateAdminRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = admin_data.validate() {
        return Ok(validation_error_response(e));
    }

    admin_data.password = match hash_password(&admin_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash admin password: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create admin")));
        }
    };

    let storage = service.get_storage(request);
    match storage.create_admin(admin_data).await {
        Ok(admin) => {
            info!(
                "Admin {} created by admin {}",
                admin.email,
                RequireJWT::extract_admin_id(request).unwrap_or_default()
            );
            Ok(HttpResponse::Created().json(admin))
        }
        Err(e) => Ok(storage_error_response(
            "create admin",
            &e,
            ConstraintHints {
                unique: Some(("email", "Email already exists")),
                ..Default::default()
            },
        )),
    }
}
