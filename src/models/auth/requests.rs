use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldError;

// 管理员登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 登录名（管理员 email）
    pub username: String,
    /// 密码
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.username.trim().is_empty() {
            return Err(FieldError::new("username", "Username is required"));
        }
        if self.password.is_empty() {
            return Err(FieldError::new("password", "Password is required"));
        }
        Ok(())
    }
}
