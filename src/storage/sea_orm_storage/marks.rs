//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::marks::{ActiveModel, Column, Entity as Marks};
use crate::errors::{GradebookError, Result};
use crate::models::marks::entities::Mark;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入或更新成绩
    ///
    /// 依赖 (student_id, subject_id) 唯一索引，单条 `INSERT ... ON CONFLICT DO UPDATE`
    /// 完成，并发写入同一对不会产生重复行。
    pub async fn upsert_mark_impl(
        &self,
        student_id: i64,
        subject_id: i64,
        obtained: String,
    ) -> Result<Mark> {
        let model = ActiveModel {
            student_id: Set(student_id),
            subject_id: Set(subject_id),
            obtained: Set(obtained),
            ..Default::default()
        };

        Marks::insert(model)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::SubjectId])
                    .update_column(Column::Obtained)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("保存成绩失败", e))?;

        let saved = Marks::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询成绩失败", e))?
            .ok_or_else(|| GradebookError::database_operation("成绩写入后未找到"))?;

        Ok(saved.into_mark())
    }

    /// 某科目下的全部成绩
    pub async fn list_marks_by_subject_impl(&self, subject_id: i64) -> Result<Vec<Mark>> {
        let marks = Marks::find()
            .filter(Column::SubjectId.eq(subject_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询科目成绩失败", e))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }
}
