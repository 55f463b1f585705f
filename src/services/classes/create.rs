use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CLASS_CONSTRAINTS, ClassService};
use crate::models::classes::requests::CreateClassRequest;
use crate::services::{storage_error_response, validation_error_response};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = class_data.validate() {
        return Ok(validation_error_response(e));
    }

    let storage = service.get_storage(request);
    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} ({}) created", class.name, class.id);
            Ok(HttpResponse::Created().json(class))
        }
        Err(e) => Ok(storage_error_response("create class", &e, CLASS_CONSTRAINTS)),
    }
}
