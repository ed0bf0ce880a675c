//! Subtask factory for creating test subtask entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subtasks with customizable fields.
///
/// Subtasks require an owning task; create one first (for example via the
/// task factory) and pass its id.
pub struct SubtaskFactory<'a> {
    db: &'a DatabaseConnection,
    description: String,
    done: bool,
    task_id: i32,
}

impl<'a> SubtaskFactory<'a> {
    /// Creates a new SubtaskFactory with default values.
    ///
    /// Defaults:
    /// - description: `"Subtask {id}"` where id is auto-incremented
    /// - done: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `task_id` - Id of the owning task
    ///
    /// # Returns
    /// - `SubtaskFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, task_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            description: format!("Subtask {}", id),
            done: false,
            task_id,
        }
    }

    /// Sets the description for the subtask.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the completion flag for the subtask.
    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Builds and inserts the subtask entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::subtask::Model)` - Created subtask entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::subtask::Model, DbErr> {
        entity::subtask::ActiveModel {
            description: ActiveValue::Set(self.description),
            done: ActiveValue::Set(self.done),
            task_id: ActiveValue::Set(self.task_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subtask with default values under the given task.
///
/// Shorthand for `SubtaskFactory::new(db, task_id).build().await`.
pub async fn create_subtask(
    db: &DatabaseConnection,
    task_id: i32,
) -> Result<entity::subtask::Model, DbErr> {
    SubtaskFactory::new(db, task_id).build().await
}
