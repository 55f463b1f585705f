use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SUBJECT_CONSTRAINTS, SubjectService};
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::services::{storage_error_response, validation_error_response};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = subject_data.validate() {
        return Ok(validation_error_response(e));
    }

    let storage = service.get_storage(request);
    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!(
                "Subject {} ({}) created for class {}",
                subject.name, subject.id, subject.class_id
            );
            Ok(HttpResponse::Created().json(subject))
        }
        Err(e) => Ok(storage_error_response("create subject", &e, SUBJECT_CONSTRAINTS)),
    }
}
