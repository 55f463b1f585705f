use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::{entities::StudentWithMarks, requests::StudentListQuery};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 列表读取失败时返回空数组，看板保持可用
    let students = storage
        .list_students_with_marks(query.class_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list students: {}", e);
            Vec::<StudentWithMarks>::new()
        });

    Ok(HttpResponse::Ok().json(students))
}
