pub mod create;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::admins::requests::CreateAdminRequest;
use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 创建管理员（仅超级管理员）
    pub async fn create_admin(
        &self,
        request: &HttpRequest,
        admin_data: CreateAdminRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_admin(self, request, admin_data).await
    }
}
