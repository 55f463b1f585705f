use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    admins::{entities::Admin, requests::CreateAdminRequest},
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    marks::entities::Mark,
    sessions::{
        entities::Session,
        requests::{CreateSessionRequest, UpdateSessionRequest},
    },
    students::{
        entities::{Student, StudentWithMarks},
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 管理员方法
    // 通过ID获取管理员
    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>>;
    // 通过邮箱（登录名）获取管理员
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>>;
    // 创建管理员，password 须为已哈希的值
    async fn create_admin(&self, admin: CreateAdminRequest) -> Result<Admin>;

    /// 学年方法
    async fn list_sessions(&self) -> Result<Vec<Session>>;
    async fn create_session(&self, session: CreateSessionRequest) -> Result<Session>;
    async fn update_session(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<Session>>;

    /// 班级方法
    async fn list_classes(&self) -> Result<Vec<Class>>;
    async fn list_classes_by_session(&self, session_id: i64) -> Result<Vec<Class>>;
    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>>;
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>>;
    // 删除班级及其学生、科目和成绩
    async fn delete_class(&self, id: i64) -> Result<bool>;

    /// 学生方法
    // 列出学生及成绩，可按班级过滤
    async fn list_students_with_marks(&self, class_id: Option<i64>)
    -> Result<Vec<StudentWithMarks>>;
    async fn get_student_with_marks(&self, id: i64) -> Result<Option<StudentWithMarks>>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn count_students(&self) -> Result<u64>;
    // 创建学生，并为班级现有科目补齐零分成绩
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 科目方法
    async fn list_subjects(&self, class_id: Option<i64>) -> Result<Vec<Subject>>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 创建科目，并为班级现有学生补齐零分成绩
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 成绩方法
    // 按 (student_id, subject_id) 原子写入或更新
    async fn upsert_mark(&self, student_id: i64, subject_id: i64, obtained: String)
    -> Result<Mark>;
    async fn list_marks_by_subject(&self, subject_id: i64) -> Result<Vec<Mark>>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
