use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学年（如 "2024-25"），与 HTTP 会话无关
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/session.ts")]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
}
