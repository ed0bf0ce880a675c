use sea_orm_migration::{prelude::*, schema::*};

use super::m20260802_000006_create_task_table::Task;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subtask::Table)
                    .if_not_exists()
                    .col(pk_auto(Subtask::Id))
                    .col(string(Subtask::Description))
                    .col(boolean(Subtask::Done))
                    .col(integer(Subtask::TaskId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subtask_task_id")
                            .from(Subtask::Table, Subtask::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subtask::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subtask {
    Table,
    Id,
    Description,
    Done,
    TaskId,
}
