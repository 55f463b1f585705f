//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::{marks, students, subjects};
use crate::errors::{GradebookError, Result};
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出班级，可按学年过滤
    pub async fn list_classes_impl(&self, session_id: Option<i64>) -> Result<Vec<Class>> {
        let mut select = Classes::find();

        if let Some(session_id) = session_id {
            select = select.filter(Column::SessionId.eq(session_id));
        }

        let classes = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询班级列表失败", e))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询班级失败", e))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            session_id: Set(req.session_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("创建班级失败", e))?;

        Ok(result.into_class())
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let Some(existing) = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("查询班级失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }

        if let Some(session_id) = update.session_id {
            model.session_id = Set(session_id);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_class()));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| GradebookError::from_db("更新班级失败", e))?;

        Ok(Some(result.into_class()))
    }

    /// 删除班级：依次删除成绩、学生、科目，最后删除班级本身
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradebookError::from_db("开启事务失败", e))?;

        let student_ids: Vec<i64> = students::Entity::find()
            .select_only()
            .column(students::Column::Id)
            .filter(students::Column::ClassId.eq(class_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| GradebookError::from_db("查询班级学生失败", e))?;

        let subject_ids: Vec<i64> = subjects::Entity::find()
            .select_only()
            .column(subjects::Column::Id)
            .filter(subjects::Column::ClassId.eq(class_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| GradebookError::from_db("查询班级科目失败", e))?;

        if !student_ids.is_empty() || !subject_ids.is_empty() {
            marks::Entity::delete_many()
                .filter(
                    Condition::any()
                        .add(marks::Column::StudentId.is_in(student_ids))
                        .add(marks::Column::SubjectId.is_in(subject_ids)),
                )
                .exec(&txn)
                .await
                .map_err(|e| GradebookError::from_db("删除班级成绩失败", e))?;
        }

        students::Entity::delete_many()
            .filter(students::Column::ClassId.eq(class_id))
            .exec(&txn)
            .await
            .map_err(|e| GradebookError::from_db("删除班级学生失败", e))?;

        subjects::Entity::delete_many()
            .filter(subjects::Column::ClassId.eq(class_id))
            .exec(&txn)
            .await
            .map_err(|e| GradebookError::from_db("删除班级科目失败", e))?;

        let result = Classes::delete_by_id(class_id)
            .exec(&txn)
            .await
            .map_err(|e| GradebookError::from_db("删除班级失败", e))?;

        txn.commit()
            .await
            .map_err(|e| GradebookError::from_db("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
