use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldError;
use crate::models::common::serde_helpers::deserialize_obtained;
use crate::utils::validate::validate_obtained;

// 录入成绩请求，按 (studentId, subjectId) upsert
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/mark.ts")]
pub struct UpdateMarkRequest {
    pub student_id: i64,
    pub subject_id: i64,
    #[serde(deserialize_with = "deserialize_obtained")]
    pub obtained: String,
}

impl UpdateMarkRequest {
    pub fn validate(&self) -> Result<f64, FieldError> {
        validate_obtained(&self.obtained).map_err(|e| FieldError::new("obtained", e))
    }
}
