pub mod admins;
pub mod auth;
pub mod classes;
pub mod common;
pub mod leaderboard;
pub mod marks;
pub mod sessions;
pub mod students;
pub mod subjects;

pub use common::{ErrorResponse, FieldError};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
