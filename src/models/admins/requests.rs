use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldError;
use crate::utils::validate::{validate_login_name, validate_name, validate_password};

// 创建管理员请求（仅超级管理员）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/admin.ts")]
pub struct CreateAdminRequest {
    pub name: String,
    pub email: String,
    // 请求中为明文，进入存储层前由服务层替换为哈希
    pub password: String,
    #[serde(default)]
    pub is_super_admin: bool,
}

impl CreateAdminRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_name(&self.name).map_err(|e| FieldError::new("name", e))?;
        validate_login_name(&self.email).map_err(|e| FieldError::new("email", e))?;

        let policy = validate_password(&self.password);
        if !policy.is_valid {
            return Err(FieldError::new("password", policy.error_message()));
        }
        Ok(())
    }
}
