use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{STUDENT_CONSTRAINTS, StudentService};
use crate::models::students::requests::CreateStudentRequest;
use crate::services::{storage_error_response, validation_error_response};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = student_data.validate() {
        return Ok(validation_error_response(e));
    }

    let storage = service.get_storage(request);
    match storage.create_student(student_data).await {
        Ok(student) => {
            info!(
                "Student {} (roll {}) added to class {}",
                student.name, student.roll_no, student.class_id
            );
            Ok(HttpResponse::Created().json(student))
        }
        Err(e) => Ok(storage_error_response("create student", &e, STUDENT_CONSTRAINTS)),
    }
}
