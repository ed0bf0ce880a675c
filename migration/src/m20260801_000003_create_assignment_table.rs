use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(pk_auto(Assignment::Id))
                    .col(string(Assignment::Title))
                    .col(big_integer(Assignment::DueDate))
                    .col(integer(Assignment::CourseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_course_id")
                            .from(Assignment::Table, Assignment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assignment {
    Table,
    Id,
    Title,
    DueDate,
    CourseId,
}
