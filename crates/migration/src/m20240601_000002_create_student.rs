//! Create `student` table with FK to `group`.
//!
//! `group_id` is nullable; a student may exist without a group. Since group
//! deletion is logical, the FK action only matters for manual row removal.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(uuid(Student::Id).primary_key())
                    .col(string_len(Student::FirstName, 128).not_null())
                    .col(string_len(Student::LastName, 128).not_null())
                    .col(string_len(Student::Email, 255).not_null())
                    // Explicitly define nullable columns to avoid conflicting NULL/NOT NULL
                    .col(ColumnDef::new(Student::Phone).string_len(32).null())
                    .col(ColumnDef::new(Student::Address).string_len(255).null())
                    .col(date(Student::BirthDate).not_null())
                    .col(ColumnDef::new(Student::GroupId).uuid().null())
                    .col(timestamp_with_time_zone(Student::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Student::UpdatedAt).not_null())
                    .col(boolean(Student::IsDeleted).not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group")
                            .from(Student::Table, Student::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student { Table, Id, FirstName, LastName, Email, Phone, Address, BirthDate, GroupId, CreatedAt, UpdatedAt, IsDeleted }

#[derive(DeriveIden)]
enum Group { Table, Id }
