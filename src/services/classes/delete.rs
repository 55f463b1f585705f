use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::services::{ConstraintHints, storage_error_response};

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 删除不存在的班级同样返回 204
    match storage.delete_class(class_id).await {
        Ok(deleted) => {
            if deleted {
                info!("Class {} deleted with its students, subjects and marks", class_id);
            }
            Ok(HttpResponse::NoContent().finish())
        }
        Err(e) => Ok(storage_error_response(
            "delete class",
            &e,
            ConstraintHints::default(),
        )),
    }
}
