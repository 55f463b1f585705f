use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::subjects::entities::Subject;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/mark.ts")]
pub struct Mark {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    // 得分，以字符串形式存储的数字
    pub obtained: String,
}

impl Mark {
    /// 得分数值，无法解析时按 0 计
    pub fn obtained_value(&self) -> f64 {
        self.obtained
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/mark.ts")]
pub struct MarkWithSubject {
    #[serde(flatten)]
    #[ts(flatten)]
    pub mark: Mark,
    pub subject: Subject,
}
