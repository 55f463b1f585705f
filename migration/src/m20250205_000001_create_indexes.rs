use sea_orm_migration::prelude::*;

use crate::m20250201_000001_create_tables::{Marks, Students, Subjects};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 每个学生每个科目最多一条成绩，成绩 upsert 依赖此索引
        manager
            .create_index(
                Index::create()
                    .name("uq_marks_student_subject")
                    .table(Marks::Table)
                    .col(Marks::StudentId)
                    .col(Marks::SubjectId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 学号在班级内唯一
        manager
            .create_index(
                Index::create()
                    .name("uq_students_class_roll_no")
                    .table(Students::Table)
                    .col(Students::ClassId)
                    .col(Students::RollNo)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subjects_class_id")
                    .table(Subjects::Table)
                    .col(Subjects::ClassId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_subjects_class_id")
                    .table(Subjects::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_students_class_roll_no")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_marks_student_subject")
                    .table(Marks::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
