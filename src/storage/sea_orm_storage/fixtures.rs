//! 测试用存储夹具

use super::SeaOrmStorage;
use crate::entity::marks;
use crate::models::{
    classes::{entities::Class, requests::CreateClassRequest},
    sessions::requests::CreateSessionRequest,
    students::{entities::Student, requests::CreateStudentRequest},
    subjects::{entities::Subject, requests::CreateSubjectRequest},
};
use crate::storage::Storage;
use sea_orm::{EntityTrait, PaginatorTrait};

pub async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::new_in_memory()
        .await
        .expect("in-memory storage")
}

pub async fn class(storage: &SeaOrmStorage) -> Class {
    class_named(storage, "10th").await
}

pub async fn class_named(storage: &SeaOrmStorage, name: &str) -> Class {
    let session = storage
        .create_session(CreateSessionRequest {
            name: "2024-25".to_string(),
            is_active: true,
        })
        .await
        .expect("session");
    storage
        .create_class(CreateClassRequest {
            name: name.to_string(),
            session_id: session.id,
        })
        .await
        .expect("class")
}

pub async fn student(storage: &SeaOrmStorage, class_id: i64, roll_no: i32, name: &str) -> Student {
    storage
        .create_student(CreateStudentRequest {
            roll_no,
            name: name.to_string(),
            class_id,
        })
        .await
        .expect("student")
}

pub async fn subject(storage: &SeaOrmStorage, class_id: i64, name: &str) -> Subject {
    storage
        .create_subject(CreateSubjectRequest {
            name: name.to_string(),
            date: "2024-07-15".to_string(),
            max_marks: 80,
            class_id,
        })
        .await
        .expect("subject")
}

pub async fn mark_count(storage: &SeaOrmStorage) -> u64 {
    marks::Entity::find()
        .count(&storage.db)
        .await
        .expect("count marks")
}

pub async fn clear_marks(storage: &SeaOrmStorage) {
    marks::Entity::delete_many()
        .exec(&storage.db)
        .await
        .expect("clear marks");
}
