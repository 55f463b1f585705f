pub mod admins;

pub mod auth;

pub mod classes;

pub mod leaderboard;

pub mod marks;

pub mod sessions;

pub mod students;

pub mod subjects;

#[cfg(test)]
mod tests;

use actix_web::web;

pub use admins::configure_admins_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use leaderboard::configure_leaderboard_routes;
pub use marks::configure_marks_routes;
pub use sessions::configure_sessions_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;

// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_admins_routes)
        .configure(configure_sessions_routes)
        .configure(configure_classes_routes)
        .configure(configure_students_routes)
        .configure(configure_subjects_routes)
        .configure(configure_marks_routes)
        .configure(configure_leaderboard_routes);
}
