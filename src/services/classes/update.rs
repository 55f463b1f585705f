use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CLASS_CONSTRAINTS, ClassService};
use crate::models::classes::requests::UpdateClassRequest;
use crate::services::{not_found_response, storage_error_response, validation_error_response};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.validate() {
        return Ok(validation_error_response(e));
    }

    let storage = service.get_storage(request);
    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(class)),
        Ok(None) => Ok(not_found_response("Class not found")),
        Err(e) => Ok(storage_error_response("update class", &e, CLASS_CONSTRAINTS)),
    }
}
