use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::services::{ConstraintHints, storage_error_response};

pub async fn delete_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_subject(subject_id).await {
        Ok(deleted) => {
            if deleted {
                info!("Subject {} deleted", subject_id);
            }
            Ok(HttpResponse::NoContent().finish())
        }
        Err(e) => Ok(storage_error_response(
            "delete subject",
            &e,
            ConstraintHints::default(),
        )),
    }
}
