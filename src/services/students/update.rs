use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{STUDENT_CONSTRAINTS, StudentService};
use crate::models::students::requests::UpdateStudentRequest;
use crate::services::{not_found_response, storage_error_response, validation_error_response};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.validate() {
        return Ok(validation_error_response(e));
    }

    let storage = service.get_storage(request);
    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(student)),
        Ok(None) => Ok(not_found_response("Student not found")),
        Err(e) => Ok(storage_error_response("update student", &e, STUDENT_CONSTRAINTS)),
    }
}
