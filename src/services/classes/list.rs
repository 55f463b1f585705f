use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::services::{ConstraintHints, storage_error_response};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    session_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = match session_id {
        Some(session_id) => storage.list_classes_by_session(session_id).await,
        None => storage.list_classes().await,
    };

    match result {
        Ok(classes) => Ok(HttpResponse::Ok().json(classes)),
        Err(e) => Ok(storage_error_response(
            "list classes",
            &e,
            ConstraintHints::default(),
        )),
    }
}
