//! 管理员存储操作

use super::SeaOrmStorage;
use crate::entity::admins::{ActiveModel, Column, Entity as Admins};
use crate::errors::{GradebookError, Result};
use crate::models::admins::{entities::Admin, requests::CreateAdminRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 通过 ID 获取管理员
    pub async fn get_admin_by_id_impl(&self, id: i64) -> Result<Option<Admin>> {
        let result = Admins::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询管理员失败", e))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 通过邮箱获取管理员
    pub async fn get_admin_by_email_impl(&self, email: &str) -> Result<Option<Admin>> {
        let result = Admins::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询管理员失败", e))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 创建管理员
    pub async fn create_admin_impl(&self, req: CreateAdminRequest) -> Result<Admin> {
        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            email: Set(req.email.trim().to_string()),
            password: Set(req.password),
            is_super_admin: Set(req.is_super_admin),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("创建管理员失败", e))?;

        Ok(result.into_admin())
    }
}
