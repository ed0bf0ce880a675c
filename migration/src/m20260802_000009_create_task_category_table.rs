use sea_orm_migration::{prelude::*, schema::*};

use super::m20260802_000006_create_task_table::Task;
use super::m20260802_000007_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(TaskCategory::Id))
                    .col(integer(TaskCategory::TaskId))
                    .col(integer(TaskCategory::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_category_task_id")
                            .from(TaskCategory::Table, TaskCategory::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_category_category_id")
                            .from(TaskCategory::Table, TaskCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_task_category_unique")
                            .col(TaskCategory::TaskId)
                            .col(TaskCategory::CategoryId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TaskCategory {
    Table,
    Id,
    TaskId,
    CategoryId,
}
