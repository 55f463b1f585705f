use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SessionService;
use crate::models::sessions::requests::CreateSessionRequest;
use crate::services::{ConstraintHints, storage_error_response, validation_error_response};

pub async fn create_session(
    service: &SessionService,
    request: &HttpRequest,
    session_data: CreateSessionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = session_data.validate() {
        return Ok(validation_error_response(e));
    }

    let storage = service.get_storage(request);
    match storage.create_session(session_data).await {
        Ok(session) => {
            info!("Session {} ({}) created", session.name, session.id);
            Ok(HttpResponse::Created().json(session))
        }
        Err(e) => Ok(storage_error_response(
            "create session",
            &e,
            ConstraintHints::default(),
        )),
    }
}
