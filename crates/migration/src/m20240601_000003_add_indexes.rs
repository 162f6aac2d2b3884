//! Secondary indexes for the business-layer lookups.
//!
//! No unique constraints here: uniqueness of `group.name` and `student.email`
//! is scoped to live rows only, so it stays a service-layer check.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Group: name lookup for the duplicate check
        manager
            .create_index(
                Index::create()
                    .name("idx_group_name")
                    .table(Group::Table)
                    .col(Group::Name)
                    .to_owned(),
            )
            .await?;

        // Student: email lookup for the duplicate check
        manager
            .create_index(
                Index::create()
                    .name("idx_student_email")
                    .table(Student::Table)
                    .col(Student::Email)
                    .to_owned(),
            )
            .await?;

        // Student: group_id for the live-count and has-students checks
        manager
            .create_index(
                Index::create()
                    .name("idx_student_group")
                    .table(Student::Table)
                    .col(Student::GroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_group_name").table(Group::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_student_email").table(Student::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_student_group").table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Group { Table, Name }

#[derive(DeriveIden)]
enum Student { Table, Email, GroupId }
