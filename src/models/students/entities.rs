use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::marks::entities::MarkWithSubject;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    // 学号，班级内唯一
    pub roll_no: i32,
    pub name: String,
    pub class_id: i64,
}

// 学生及其全部成绩（每条成绩附带所属科目），按成绩 ID 排序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/student.ts")]
pub struct StudentWithMarks {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub marks: Vec<MarkWithSubject>,
}
