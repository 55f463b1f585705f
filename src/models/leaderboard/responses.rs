use serde::Serialize;
use ts_rs::TS;

use crate::models::students::entities::StudentWithMarks;

// 排行榜条目：学生、总分与百分比
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/leaderboard.ts")]
pub struct RankedStudent {
    pub rank: usize,
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: StudentWithMarks,
    pub total_obtained: f64,
    pub total_max: i64,
    pub percentage: f64,
}

// 排行榜响应，附带看板统计
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/leaderboard.ts")]
pub struct LeaderboardResponse {
    // 过滤前的学生总数
    pub total_students: usize,
    // 过滤后学生的平均百分比，保留一位小数
    pub average_percentage: f64,
    pub top_performer: Option<String>,
    pub entries: Vec<RankedStudent>,
}
