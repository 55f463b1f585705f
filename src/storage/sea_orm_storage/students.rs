//! 学生存储操作
//!
//! 学生读取总是附带成绩与对应科目；新建学生时为班级已有科目补齐零分成绩。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model as StudentModel};
use crate::entity::{marks, subjects};
use crate::errors::{GradebookError, Result};
use crate::models::{
    marks::entities::MarkWithSubject,
    students::{
        entities::{Student, StudentWithMarks},
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    subjects::entities::Subject,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// 把学生、成绩和科目拼装为 StudentWithMarks
///
/// `marks` 须已按 ID 排序；找不到科目的成绩使用占位科目。
pub(crate) fn assemble_students_with_marks(
    students: Vec<Student>,
    marks: Vec<marks::Model>,
    subjects: Vec<Subject>,
) -> Vec<StudentWithMarks> {
    let subjects: HashMap<i64, Subject> = subjects.into_iter().map(|s| (s.id, s)).collect();

    let mut by_student: HashMap<i64, Vec<MarkWithSubject>> = HashMap::new();
    for mark in marks {
        let subject = subjects
            .get(&mark.subject_id)
            .cloned()
            .unwrap_or_else(Subject::placeholder);
        by_student
            .entry(mark.student_id)
            .or_default()
            .push(MarkWithSubject {
                mark: mark.into_mark(),
                subject,
            });
    }

    students
        .into_iter()
        .map(|student| StudentWithMarks {
            marks: by_student.remove(&student.id).unwrap_or_default(),
            student,
        })
        .collect()
}

impl SeaOrmStorage {
    /// 列出学生及其成绩，按创建顺序排列
    pub async fn list_students_with_marks_impl(
        &self,
        class_id: Option<i64>,
    ) -> Result<Vec<StudentWithMarks>> {
        let mut select = Students::find();

        if let Some(class_id) = class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let students = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询学生列表失败", e))?;

        self.attach_marks(students).await
    }

    /// 获取单个学生及其成绩
    pub async fn get_student_with_marks_impl(&self, id: i64) -> Result<Option<StudentWithMarks>> {
        let Some(student) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询学生失败", e))?
        else {
            return Ok(None);
        };

        Ok(self.attach_marks(vec![student]).await?.pop())
    }

    async fn attach_marks(&self, students: Vec<StudentModel>) -> Result<Vec<StudentWithMarks>> {
        if students.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();

        let marks = marks::Entity::find()
            .filter(marks::Column::StudentId.is_in(student_ids))
            .order_by_asc(marks::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询学生成绩失败", e))?;

        let mut subject_ids: Vec<i64> = marks.iter().map(|m| m.subject_id).collect();
        subject_ids.sort_unstable();
        subject_ids.dedup();

        let subjects = if subject_ids.is_empty() {
            Vec::new()
        } else {
            subjects::Entity::find()
                .filter(subjects::Column::Id.is_in(subject_ids))
                .all(&self.db)
                .await
                .map_err(|e| GradebookError::from_db("查询成绩科目失败", e))?
        };

        Ok(assemble_students_with_marks(
            students.into_iter().map(|m| m.into_student()).collect(),
            marks,
            subjects.into_iter().map(|m| m.into_subject()).collect(),
        ))
    }

    /// 通过 ID 获取学生（不含成绩）
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询学生失败", e))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 学生总数
    pub async fn count_students_impl(&self) -> Result<u64> {
        Students::find()
            .count(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("统计学生数量失败", e))
    }

    /// 创建学生，并在同一事务中为班级现有科目写入零分成绩
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradebookError::from_db("开启事务失败", e))?;

        let model = ActiveModel {
            roll_no: Set(req.roll_no),
            name: Set(req.name.trim().to_string()),
            class_id: Set(req.class_id),
            ..Default::default()
        };

        let student = model
            .insert(&txn)
            .await
            .map_err(|e| GradebookError::from_db("创建学生失败", e))?;

        let subject_ids: Vec<i64> = subjects::Entity::find()
            .filter(subjects::Column::ClassId.eq(student.class_id))
            .order_by_asc(subjects::Column::Id)
            .all(&txn)
            .await
            .map_err(|e| GradebookError::from_db("查询班级科目失败", e))?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let pairs = subject_ids.into_iter().map(|subject_id| (student.id, subject_id));
        Self::insert_zero_marks(&txn, pairs).await?;

        txn.commit()
            .await
            .map_err(|e| GradebookError::from_db("提交事务失败", e))?;

        Ok(student.into_student())
    }

    /// 批量写入零分成绩
    pub(crate) async fn insert_zero_marks<C>(
        conn: &C,
        pairs: impl IntoIterator<Item = (i64, i64)>,
    ) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let models: Vec<marks::ActiveModel> = pairs
            .into_iter()
            .map(|(student_id, subject_id)| marks::ActiveModel {
                student_id: Set(student_id),
                subject_id: Set(subject_id),
                obtained: Set("0".to_string()),
                ..Default::default()
            })
            .collect();

        if models.is_empty() {
            return Ok(0);
        }

        let count = models.len() as u64;
        marks::Entity::insert_many(models)
            .exec_without_returning(conn)
            .await
            .map_err(|e| GradebookError::from_db("补齐成绩失败", e))?;

        Ok(count)
    }

    /// 更新学生
    ///
    /// 换班时在同一事务中清除原班级成绩，并为新班级科目补齐零分成绩。
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询学生失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(roll_no) = update.roll_no {
            model.roll_no = Set(roll_no);
        }

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_student()));
        }

        let moved_to = update.class_id.filter(|&c| c != existing.class_id);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradebookError::from_db("开启事务失败", e))?;

        let result = model
            .update(&txn)
            .await
            .map_err(|e| GradebookError::from_db("更新学生失败", e))?;

        if let Some(class_id) = moved_to {
            marks::Entity::delete_many()
                .filter(marks::Column::StudentId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| GradebookError::from_db("清除原班级成绩失败", e))?;

            let subject_ids: Vec<i64> = subjects::Entity::find()
                .filter(subjects::Column::ClassId.eq(class_id))
                .order_by_asc(subjects::Column::Id)
                .all(&txn)
                .await
                .map_err(|e| GradebookError::from_db("查询班级科目失败", e))?
                .into_iter()
                .map(|s| s.id)
                .collect();

            Self::insert_zero_marks(&txn, subject_ids.into_iter().map(|sid| (id, sid))).await?;
        }

        txn.commit()
            .await
            .map_err(|e| GradebookError::from_db("提交事务失败", e))?;

        Ok(Some(result.into_student()))
    }

    /// 删除学生及其全部成绩
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradebookError::from_db("开启事务失败", e))?;

        marks::Entity::delete_many()
            .filter(marks::Column::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| GradebookError::from_db("删除学生成绩失败", e))?;

        let result = Students::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| GradebookError::from_db("删除学生失败", e))?;

        txn.commit()
            .await
            .map_err(|e| GradebookError::from_db("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
