use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldError;
use crate::utils::validate::validate_name;

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub session_id: i64,
}

impl CreateClassRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_name(&self.name).map_err(|e| FieldError::new("name", e))
    }
}

// 更新班级请求
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub session_id: Option<i64>,
}

impl UpdateClassRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(name) = &self.name {
            validate_name(name).map_err(|e| FieldError::new("name", e))?;
        }
        Ok(())
    }
}
