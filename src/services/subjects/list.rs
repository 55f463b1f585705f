use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::requests::SubjectListQuery;
use crate::services::{ConstraintHints, storage_error_response};

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    query: SubjectListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects(query.class_id).await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(subjects)),
        Err(e) => Ok(storage_error_response(
            "list subjects",
            &e,
            ConstraintHints::default(),
        )),
    }
}
