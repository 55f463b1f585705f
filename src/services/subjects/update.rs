use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SUBJECT_CONSTRAINTS, SubjectService};
use crate::models::FieldError;
use crate::models::subjects::requests::UpdateSubjectRequest;
use crate::services::{not_found_response, storage_error_response, validation_error_response};

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    update_data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.validate() {
        return Ok(validation_error_response(e));
    }

    let storage = service.get_storage(request);

    // 降低满分时不得低于已录入的成绩；换班会清空原有成绩，无需检查
    if let Some(max_marks) = update_data.max_marks {
        let existing = match storage.get_subject_by_id(subject_id).await {
            Ok(Some(subject)) => subject,
            Ok(None) => return Ok(not_found_response("Subject not found")),
            Err(e) => {
                return Ok(storage_error_response(
                    "update subject",
                    &e,
                    SUBJECT_CONSTRAINTS,
                ));
            }
        };

        let moving = update_data
            .class_id
            .is_some_and(|class_id| class_id != existing.class_id);

        if !moving && max_marks < existing.max_marks {
            let marks = match storage.list_marks_by_subject(subject_id).await {
                Ok(marks) => marks,
                Err(e) => {
                    return Ok(storage_error_response(
                        "update subject",
                        &e,
                        SUBJECT_CONSTRAINTS,
                    ));
                }
            };

            if marks
                .iter()
                .any(|m| m.obtained_value() > f64::from(max_marks))
            {
                return Ok(validation_error_response(FieldError::new(
                    "maxMarks",
                    "Maximum marks cannot be lower than an existing mark",
                )));
            }
        }
    }

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(subject)),
        Ok(None) => Ok(not_found_response("Subject not found")),
        Err(e) => Ok(storage_error_response("update subject", &e, SUBJECT_CONSTRAINTS)),
    }
}
