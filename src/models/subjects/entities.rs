use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    // 考试日期 YYYY-MM-DD
    pub date: String,
    pub max_marks: i32,
    pub class_id: i64,
}

impl Subject {
    /// 成绩引用的科目已不存在时使用的占位科目
    pub fn placeholder() -> Self {
        Self {
            id: 0,
            name: "Unknown".to_string(),
            date: String::new(),
            max_marks: 100,
            class_id: 0,
        }
    }
}
