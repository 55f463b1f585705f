use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::services::{ConstraintHints, storage_error_response};

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(student_id).await {
        Ok(deleted) => {
            if deleted {
                info!("Student {} deleted", student_id);
            }
            Ok(HttpResponse::NoContent().finish())
        }
        Err(e) => Ok(storage_error_response(
            "delete student",
            &e,
            ConstraintHints::default(),
        )),
    }
}
