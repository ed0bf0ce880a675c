use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_course_table::Course;
use super::m20260801_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseInstructor::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseInstructor::Id))
                    .col(integer(CourseInstructor::CourseId))
                    .col(integer(CourseInstructor::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_instructor_course_id")
                            .from(CourseInstructor::Table, CourseInstructor::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_instructor_user_id")
                            .from(CourseInstructor::Table, CourseInstructor::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_course_instructor_unique")
                            .col(CourseInstructor::CourseId)
                            .col(CourseInstructor::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseInstructor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseInstructor {
    Table,
    Id,
    CourseId,
    UserId,
}
