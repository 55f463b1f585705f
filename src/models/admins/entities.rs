use serde::Serialize;
use ts_rs::TS;

// 管理员，email 同时作为登录用户名
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/admin.ts")]
pub struct Admin {
    pub id: i64,
    pub name: String,
    pub email: String,
    // 密码哈希，不输出到响应中
    #[serde(skip_serializing)]
    #[ts(skip)]
    pub password: String,
    pub is_super_admin: bool,
}
