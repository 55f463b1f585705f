//! 启动时写入默认数据
//!
//! 每一步都先检查再写入，重复执行不会产生重复数据。

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{Argon2Config, SeedConfig};
use crate::errors::Result;
use crate::models::admins::requests::CreateAdminRequest;
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use crate::models::sessions::{entities::Session, requests::CreateSessionRequest};
use crate::models::students::requests::CreateStudentRequest;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password_with;

pub const DEFAULT_SESSION_NAME: &str = "2024-25";
pub const DEFAULT_CLASS_NAME: &str = "10th";
pub const DEFAULT_SUBJECT_NAME: &str = "Initial Test";
pub const SAMPLE_MAX_MARKS: i32 = 80;

/// 示例名单：(学号, 姓名, 得分)，满分均为 80
pub const SAMPLE_ROSTER: &[(i32, &str, u32)] = &[
    (1, "Aakash Yadav", 54),
    (2, "Aryan Kumar", 51),
    (3, "Rahul Kumar", 70),
    (4, "Aman Kumar", 46),
    (5, "Prince Kumar", 0),
    (6, "Faiz Raza", 58),
    (7, "Meraj Alam", 0),
    (8, "Afroz", 0),
    (9, "Ismail", 0),
    (10, "Khusboo", 62),
    (11, "Salma Parveen", 0),
    (12, "Aaisha Khatoon", 49),
    (13, "Sahima", 0),
    (14, "Aashiya", 45),
    (15, "Shanzida", 36),
    (16, "Maimuna", 68),
    (17, "Soha", 56),
    (18, "Naziya (U)", 58),
    (19, "Jashmin", 56),
    (20, "Usha Kumari", 38),
    (21, "Gungun", 54),
    (22, "Naziya (D)", 45),
    (23, "Shahina Khatoon", 60),
    (24, "Sonam Kumari", 40),
    (25, "Farzana", 65),
    (26, "Muskan Khatoon", 53),
    (27, "Sabina", 60),
    (28, "Farhin", 0),
    (29, "Sanaa Parveen", 66),
    (30, "Rani Parveen", 56),
    (31, "Gulafsa", 68),
    (32, "Sajiya Khatoon", 54),
    (33, "Amarjit Kumar", 47),
    (34, "Prince Yadav", 21),
    (35, "Tabrez", 41),
    (36, "Faiz", 0),
    (37, "Muskan II", 0),
    (38, "Tahir", 40),
    (39, "Anshu Kumari", 0),
];

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 按顺序写入默认学年、班级、管理员和示例名单
pub async fn seed_database(
    storage: &Arc<dyn Storage>,
    seed: &SeedConfig,
    argon2: &Argon2Config,
) -> Result<()> {
    let session = seed_session(storage).await?;
    let class = seed_class(storage, &session).await?;
    seed_admin(storage, seed, argon2).await?;

    if seed.sample_data {
        seed_sample_roster(storage, &class).await?;
    } else {
        debug!("Sample roster disabled by configuration");
    }
    Ok(())
}

async fn seed_session(storage: &Arc<dyn Storage>) -> Result<Session> {
    if let Some(session) = storage.list_sessions().await?.into_iter().next() {
        return Ok(session);
    }

    info!("Creating default session {}", DEFAULT_SESSION_NAME);
    storage
        .create_session(CreateSessionRequest {
            name: DEFAULT_SESSION_NAME.to_string(),
            is_active: true,
        })
        .await
}

async fn seed_class(storage: &Arc<dyn Storage>, session: &Session) -> Result<Class> {
    if let Some(class) = storage.list_classes().await?.into_iter().next() {
        return Ok(class);
    }

    info!("Creating default class {}", DEFAULT_CLASS_NAME);
    storage
        .create_class(CreateClassRequest {
            name: DEFAULT_CLASS_NAME.to_string(),
            session_id: session.id,
        })
        .await
}

async fn seed_admin(
    storage: &Arc<dyn Storage>,
    seed: &SeedConfig,
    argon2: &Argon2Config,
) -> Result<()> {
    if storage.get_admin_by_email(&seed.admin_email).await?.is_some() {
        debug!("Admin {} already exists, skipping admin seed", seed.admin_email);
        return Ok(());
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let admin = storage
        .create_admin(CreateAdminRequest {
            name: "Administrator".to_string(),
            email: seed.admin_email.clone(),
            password: hash_password_with(&password, argon2)?,
            is_super_admin: true,
        })
        .await?;

    info!(
        "Default admin account created (ID: {}, email: {})",
        admin.id, admin.email
    );
    Ok(())
}

async fn seed_sample_roster(storage: &Arc<dyn Storage>, class: &Class) -> Result<()> {
    let existing = storage.count_students().await?;
    if existing > 0 {
        debug!(
            "Database already has {} student(s), skipping sample roster",
            existing
        );
        return Ok(());
    }

    info!("Seeding sample roster into class {}", class.name);

    let subject = storage
        .create_subject(CreateSubjectRequest {
            name: DEFAULT_SUBJECT_NAME.to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            max_marks: SAMPLE_MAX_MARKS,
            class_id: class.id,
        })
        .await?;

    for &(roll_no, name, obtained) in SAMPLE_ROSTER {
        let student = storage
            .create_student(CreateStudentRequest {
                roll_no,
                name: name.to_string(),
                class_id: class.id,
            })
            .await?;
        storage
            .upsert_mark(student.id, subject.id, obtained.to_string())
            .await?;
    }

    info!("Seeded {} sample students", SAMPLE_ROSTER.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::leaderboard::ranking::{rank_students, summarize};
    use crate::storage::sea_orm_storage::fixtures;

    fn light_argon2() -> Argon2Config {
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    fn seed_config(sample_data: bool) -> SeedConfig {
        SeedConfig {
            admin_email: "admin".to_string(),
            sample_data,
        }
    }

    async fn shared_storage() -> Arc<dyn Storage> {
        Arc::new(fixtures::storage().await)
    }

    #[actix_web::test]
    async fn test_seed_creates_defaults_and_roster() {
        let storage = shared_storage().await;
        seed_database(&storage, &seed_config(true), &light_argon2())
            .await
            .unwrap();

        let sessions = storage.list_sessions().await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].name, DEFAULT_SESSION_NAME);
        assert!(sessions[0].is_active);

        let classes = storage.list_classes().await.unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, DEFAULT_CLASS_NAME);

        let admin = storage.get_admin_by_email("admin").await.unwrap().unwrap();
        assert!(admin.is_super_admin);
        assert_eq!(admin.name, "Administrator");

        let students = storage.list_students_with_marks(None).await.unwrap();
        assert_eq!(students.len(), 39);
        assert_eq!(students[0].student.name, "Aakash Yadav");
        assert_eq!(students[0].marks.len(), 1);
        assert_eq!(students[0].marks[0].mark.obtained, "54");
        assert_eq!(students[0].marks[0].subject.max_marks, SAMPLE_MAX_MARKS);
    }

    #[actix_web::test]
    async fn test_seed_is_idempotent() {
        let storage = shared_storage().await;
        let config = seed_config(true);
        seed_database(&storage, &config, &light_argon2())
            .await
            .unwrap();
        seed_database(&storage, &config, &light_argon2())
            .await
            .unwrap();

        assert_eq!(storage.list_sessions().await.unwrap().len(), 1);
        assert_eq!(storage.list_classes().await.unwrap().len(), 1);
        assert_eq!(storage.list_subjects(None).await.unwrap().len(), 1);
        assert_eq!(storage.count_students().await.unwrap(), 39);
    }

    #[actix_web::test]
    async fn test_seed_without_sample_data() {
        let storage = shared_storage().await;
        seed_database(&storage, &seed_config(false), &light_argon2())
            .await
            .unwrap();

        assert_eq!(storage.count_students().await.unwrap(), 0);
        assert!(storage.list_subjects(None).await.unwrap().is_empty());
        assert!(storage.get_admin_by_email("admin").await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_seeded_leaderboard() {
        let storage = shared_storage().await;
        seed_database(&storage, &seed_config(true), &light_argon2())
            .await
            .unwrap();

        let students = storage.list_students_with_marks(None).await.unwrap();
        let ranked = rank_students(students, None);
        let summary = summarize(39, ranked);
        assert_eq!(summary.top_performer.as_deref(), Some("Rahul Kumar"));
        assert_eq!(summary.entries[0].percentage, 87.5);
        assert_eq!(summary.entries.last().map(|e| e.percentage), Some(0.0));
    }
}
