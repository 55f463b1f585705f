use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::sessions::requests::{CreateSessionRequest, UpdateSessionRequest};
use crate::services::{ClassService, SessionService};
use crate::utils::{SafeIDI64, SafeSessionIdI64};

// 懒加载的全局 SESSION_SERVICE 实例
static SESSION_SERVICE: Lazy<SessionService> = Lazy::new(SessionService::new_lazy);
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_sessions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.list_sessions(&req).await
}

pub async fn create_session(
    req: HttpRequest,
    session_data: web::Json<CreateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .create_session(&req, session_data.into_inner())
        .await
}

pub async fn update_session(
    req: HttpRequest,
    session_id: SafeIDI64,
    update_data: web::Json<UpdateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .update_session(&req, session_id.0, update_data.into_inner())
        .await
}

pub async fn list_session_classes(
    req: HttpRequest,
    session_id: SafeSessionIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_session_classes(&req, session_id.0).await
}

// 配置路由
pub fn configure_sessions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/sessions")
            .service(
                web::resource("")
                    .route(web::get().to(list_sessions))
                    .route(web::post().to(create_session).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::patch().to(update_session).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{session_id}/classes").route(web::get().to(list_session_classes)),
            ),
    );
}
