/*!
 * 超级管理员权限中间件
 *
 * 必须在 [`RequireJWT`](super::RequireJWT) 之后执行（即在路由上先 `.wrap(RequireSuperAdmin)`
 * 再 `.wrap(RequireJWT)`），依赖其放入请求扩展的管理员信息。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::admins::entities::Admin;

use super::create_error_response;

#[derive(Clone)]
pub struct RequireSuperAdmin;

impl<S, B> Transform<S, ServiceRequest> for RequireSuperAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSuperAdminMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSuperAdminMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSuperAdminMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSuperAdminMiddleware<S>
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
            let admin = req.extensions().get::<Admin>().cloned();

            match admin {
                Some(admin) if admin.is_super_admin => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Some(admin) => {
                    info!("Access denied for admin {}: super admin required", admin.id);
                    Ok(req.into_response(
                        create_error_response(StatusCode::FORBIDDEN, "Forbidden")
                            .map_into_right_body(),
                    ))
                }
                None => {
                    info!(
                        "Super admin check failed: no admin in request. Make sure RequireJWT middleware is applied first."
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}
