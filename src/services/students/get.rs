use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::services::{ConstraintHints, not_found_response, storage_error_response};

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_with_marks(student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(student)),
        Ok(None) => Ok(not_found_response("Student not found")),
        Err(e) => Ok(storage_error_response(
            "get student",
            &e,
            ConstraintHints::default(),
        )),
    }
}
