use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::serde_helpers::deserialize_optional_id;

// 排行榜查询参数
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/leaderboard.ts")]
pub struct LeaderboardQuery {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[ts(optional)]
    pub class_id: Option<i64>,
    // 按姓名（不区分大小写）或学号子串过滤
    #[ts(optional)]
    pub search: Option<String>,
}
