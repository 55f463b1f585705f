/*!
 * JWT 认证中间件
 *
 * 保护所有写操作路由：只有已登录的管理员才能继续访问。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireJWT;
 *
 * web::resource("/api/students")
 *     .route(web::get().to(list_students))
 *     .route(web::post().to(create_student).wrap(RequireJWT));
 * ```
 *
 * ## 认证流程
 *
 * 1. 从 `Authorization: Bearer <JWT>` 或会话 Cookie 中取出令牌
 * 2. 校验签名与有效期，取出 `sub` 中的管理员 ID
 * 3. 从存储中加载管理员并放入请求扩展，处理函数可通过
 *    [`RequireJWT::extract_admin`] 读取
 * 4. 任一步失败返回 401 `{"message": "Unauthorized"}`，请求不会到达处理函数
 */

use crate::models::admins::entities::Admin;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, error, info};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireJWT;

enum AuthFailure {
    Unauthorized(String),
    Internal(String),
}

// 辅助函数：提取令牌并加载对应管理员
async fn authenticate(req: &ServiceRequest) -> Result<Admin, AuthFailure> {
    let token = JwtUtils::extract_token(req.request())
        .ok_or_else(|| AuthFailure::Unauthorized("missing token".to_string()))?;

    let claims = JwtUtils::verify_token(&token)
        .map_err(|err| AuthFailure::Unauthorized(format!("invalid token: {err}")))?;

    let admin_id = claims
        .admin_id()
        .ok_or_else(|| AuthFailure::Unauthorized("invalid subject in token".to_string()))?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| AuthFailure::Internal("storage not found in app data".to_string()))?;

    storage
        .get_admin_by_id(admin_id)
        .await
        .map_err(|err| AuthFailure::Internal(format!("failed to load admin: {err}")))?
        .ok_or_else(|| AuthFailure::Unauthorized(format!("admin {admin_id} no longer exists")))
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            match authenticate(&req).await {
                Ok(admin) => {
                    debug!("JWT authentication successful for admin ID: {}", admin.id);
                    req.extensions_mut().insert(admin);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(AuthFailure::Unauthorized(reason)) => {
                    info!(
                        "JWT authentication failed for {} {}: {}",
                        req.method(),
                        req.path(),
                        reason
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
                            .map_into_right_body(),
                    ))
                }
                Err(AuthFailure::Internal(reason)) => {
                    error!("JWT authentication error: {}", reason);
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取管理员信息
impl RequireJWT {
    /// 从请求扩展中提取当前管理员
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_admin(req: &actix_web::HttpRequest) -> Option<Admin> {
        req.extensions().get::<Admin>().cloned()
    }

    /// 从请求扩展中提取管理员ID
    pub fn extract_admin_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Admin>().map(|admin| admin.id)
    }
}
