use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::model::subtask::CreateSubtaskParams;

/// Repository providing database operations for subtasks.
pub struct SubtaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubtaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new subtask owned by the given task.
    pub async fn create(
        &self,
        task_id: i32,
        params: CreateSubtaskParams,
    ) -> Result<entity::subtask::Model, DbErr> {
        entity::subtask::ActiveModel {
            description: ActiveValue::Set(params.description),
            done: ActiveValue::Set(params.done),
            task_id: ActiveValue::Set(task_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
