use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::services::{ConstraintHints, storage_error_response};

pub async fn list_sessions(
    service: &SessionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_sessions().await {
        Ok(sessions) => Ok(HttpResponse::Ok().json(sessions)),
        Err(e) => Ok(storage_error_response(
            "list sessions",
            &e,
            ConstraintHints::default(),
        )),
    }
}
