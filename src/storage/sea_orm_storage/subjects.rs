//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::entity::{marks, students};
use crate::errors::{GradebookError, Result};
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出科目，可按班级过滤
    pub async fn list_subjects_impl(&self, class_id: Option<i64>) -> Result<Vec<Subject>> {
        let mut select = Subjects::find();

        if let Some(class_id) = class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let subjects = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询科目列表失败", e))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询科目失败", e))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 创建科目，并在同一事务中为班级现有学生写入零分成绩
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradebookError::from_db("开启事务失败", e))?;

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            date: Set(req.date),
            max_marks: Set(req.max_marks),
            class_id: Set(req.class_id),
            ..Default::default()
        };

        let subject = model
            .insert(&txn)
            .await
            .map_err(|e| GradebookError::from_db("创建科目失败", e))?;

        let student_ids: Vec<i64> = students::Entity::find()
            .select_only()
            .column(students::Column::Id)
            .filter(students::Column::ClassId.eq(subject.class_id))
            .order_by_asc(students::Column::Id)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| GradebookError::from_db("查询班级学生失败", e))?;

        let pairs = student_ids
            .into_iter()
            .map(|student_id| (student_id, subject.id));
        let backfilled = Self::insert_zero_marks(&txn, pairs).await?;

        txn.commit()
            .await
            .map_err(|e| GradebookError::from_db("提交事务失败", e))?;

        tracing::debug!(
            "Subject {} created with {} backfilled marks",
            subject.id,
            backfilled
        );

        Ok(subject.into_subject())
    }

    /// 更新科目
    ///
    /// 换班时在同一事务中清除该科目原有成绩，并为新班级学生补齐零分成绩。
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let Some(existing) = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询科目失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }

        if let Some(date) = update.date {
            model.date = Set(date);
        }

        if let Some(max_marks) = update.max_marks {
            model.max_marks = Set(max_marks);
        }

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_subject()));
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
            .map_err(|e| GradebookError::from_db("更新科目失败", e))?;

        if let Some(class_id) = moved_to {
            marks::Entity::delete_many()
                .filter(marks::Column::SubjectId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| GradebookError::from_db("清除科目成绩失败", e))?;

            let student_ids: Vec<i64> = students::Entity::find()
                .select_only()
                .column(students::Column::Id)
                .filter(students::Column::ClassId.eq(class_id))
                .order_by_asc(students::Column::Id)
                .into_tuple()
                .all(&txn)
                .await
                .map_err(|e| GradebookError::from_db("查询班级学生失败", e))?;

            Self::insert_zero_marks(&txn, student_ids.into_iter().map(|sid| (sid, id))).await?;
        }

        txn.commit()
            .await
            .map_err(|e| GradebookError::from_db("提交事务失败", e))?;

        Ok(Some(result.into_subject()))
    }

    /// 删除科目及其全部成绩
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradebookError::from_db("开启事务失败", e))?;

        marks::Entity::delete_many()
            .filter(marks::Column::SubjectId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| GradebookError::from_db("删除科目成绩失败", e))?;

        let result = Subjects::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| GradebookError::from_db("删除科目失败", e))?;

        txn.commit()
            .await
            .map_err(|e| GradebookError::from_db("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
