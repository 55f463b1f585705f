pub mod list;
pub mod ranking;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::leaderboard::requests::LeaderboardQuery;
use crate::storage::Storage;

pub struct LeaderboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl LeaderboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 排行榜与看板统计
    pub async fn get_leaderboard(
        &self,
        request: &HttpRequest,
        query: LeaderboardQuery,
    ) -> ActixResult<HttpResponse> {
        list::get_leaderboard(self, request, query).await
    }
}
