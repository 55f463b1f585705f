pub mod create;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sessions::requests::{CreateSessionRequest, UpdateSessionRequest};
use crate::storage::Storage;

pub struct SessionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SessionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_sessions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_sessions(self, request).await
    }

    pub async fn create_session(
        &self,
        request: &HttpRequest,
        session_data: CreateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_session(self, request, session_data).await
    }

    pub async fn update_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
        update_data: UpdateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_session(self, request, session_id, update_data).await
    }
}
