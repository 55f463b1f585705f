use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::marks::requests::UpdateMarkRequest;
use crate::services::MarkService;

static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);

pub async fn update_mark(
    req: HttpRequest,
    mark_data: web::Json<UpdateMarkRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.update_mark(&req, mark_data.into_inner()).await
}

// 配置路由
pub fn configure_marks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/marks")
            .route(web::post().to(update_mark).wrap(middlewares::RequireJWT)),
    );
}
