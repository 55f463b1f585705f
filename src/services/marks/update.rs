use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MarkService;
use crate::models::FieldError;
use crate::models::marks::requests::UpdateMarkRequest;
use crate::services::{
    ConstraintHints, not_found_response, storage_error_response, validation_error_response,
};

pub async fn update_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_data: UpdateMarkRequest,
) -> ActixResult<HttpResponse> {
    let obtained = match mark_data.validate() {
        Ok(value) => value,
        Err(e) => return Ok(validation_error_response(e)),
    };

    let storage = service.get_storage(request);
    let hints = ConstraintHints {
        unique: None,
        reference: Some(("studentId", "Student or subject does not exist")),
    };

    let student = match storage.get_student_by_id(mark_data.student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(not_found_response("Student not found")),
        Err(e) => return Ok(storage_error_response("save mark", &e, hints)),
    };

    let subject = match storage.get_subject_by_id(mark_data.subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => return Ok(not_found_response("Subject not found")),
        Err(e) => return Ok(storage_error_response("save mark", &e, hints)),
    };

    if subject.class_id != student.class_id {
        return Ok(validation_error_response(FieldError::new(
            "subjectId",
            "Subject does not belong to the student's class",
        )));
    }

    if obtained > f64::from(subject.max_marks) {
        return Ok(validation_error_response(FieldError::new(
            "obtained",
            format!("Obtained marks cannot exceed {}", subject.max_marks),
        )));
    }

    match storage
        .upsert_mark(student.id, subject.id, mark_data.obtained)
        .await
    {
        Ok(mark) => {
            info!(
                "Mark for student {} in subject {} set to {}",
                mark.student_id, mark.subject_id, mark.obtained
            );
            Ok(HttpResponse::Ok().json(mark))
        }
        Err(e) => Ok(storage_error_response("save mark", &e, hints)),
    }
}
