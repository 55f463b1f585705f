//! 学年存储操作

use super::SeaOrmStorage;
use crate::entity::sessions::{ActiveModel, Column, Entity as Sessions};
use crate::errors::{GradebookError, Result};
use crate::models::sessions::{
    entities::Session,
    requests::{CreateSessionRequest, UpdateSessionRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部学年
    pub async fn list_sessions_impl(&self) -> Result<Vec<Session>> {
        let sessions = Sessions::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询学年列表失败", e))?;

        Ok(sessions.into_iter().map(|m| m.into_session()).collect())
    }

    /// 创建学年
    pub async fn create_session_impl(&self, req: CreateSessionRequest) -> Result<Session> {
        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            is_active: Set(req.is_active),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("创建学年失败", e))?;

        Ok(result.into_session())
    }

    /// 更新学年
    pub async fn update_session_impl(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<Session>> {
        let Some(existing) = Sessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询学年失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_session()));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("更新学年失败", e))?;

        Ok(Some(result.into_session()))
    }
}
