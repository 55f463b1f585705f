use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaderboardService;
use super::ranking::{rank_students, summarize};
use crate::models::leaderboard::requests::LeaderboardQuery;
use crate::services::{ConstraintHints, storage_error_response};

pub async fn get_leaderboard(
    service: &LeaderboardService,
    request: &HttpRequest,
    query: LeaderboardQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let students = match storage.list_students_with_marks(query.class_id).await {
        Ok(students) => students,
        Err(e) => {
            return Ok(storage_error_response(
                "load leaderboard",
                &e,
                ConstraintHints::default(),
            ));
        }
    };

    let total_students = students.len();
    let entries = rank_students(students, query.search.as_deref());

    Ok(HttpResponse::Ok().json(summarize(total_students, entries)))
}
