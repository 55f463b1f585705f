use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::sessions::requests::UpdateSessionRequest;
use crate::services::{
    ConstraintHints, not_found_response, storage_error_response, validation_error_response,
};

pub async fn update_session(
    service: &SessionService,
    request: &HttpRequest,
    session_id: i64,
    update_data: UpdateSessionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.validate() {
        return Ok(validation_error_response(e));
    }

    let storage = service.get_storage(request);
    match storage.update_session(session_id, update_data).await {
        Ok(Some(session)) => Ok(HttpResponse::Ok().json(session)),
        Ok(None) => Ok(not_found_response("Session not found")),
        Err(e) => Ok(storage_error_response(
            "update session",
            &e,
            ConstraintHints::default(),
        )),
    }
}
