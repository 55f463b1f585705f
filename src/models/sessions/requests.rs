use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldError;
use crate::utils::validate::validate_name;

// 创建学年请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/session.ts")]
pub struct CreateSessionRequest {
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

impl CreateSessionRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_name(&self.name).map_err(|e| FieldError::new("name", e))
    }
}

// 更新学年请求（部分更新）
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/session.ts")]
pub struct UpdateSessionRequest {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateSessionRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(name) = &self.name {
            validate_name(name).map_err(|e| FieldError::new("name", e))?;
        }
        Ok(())
    }
}
