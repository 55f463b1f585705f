use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::leaderboard::requests::LeaderboardQuery;
use crate::services::LeaderboardService;

static LEADERBOARD_SERVICE: Lazy<LeaderboardService> = Lazy::new(LeaderboardService::new_lazy);

pub async fn get_leaderboard(
    req: HttpRequest,
    query: web::Query<LeaderboardQuery>,
) -> ActixResult<HttpResponse> {
    LEADERBOARD_SERVICE
        .get_leaderboard(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_leaderboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/leaderboard").route(web::get().to(get_leaderboard)));
}
