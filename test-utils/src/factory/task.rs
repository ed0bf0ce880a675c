//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks with customizable fields.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    description: String,
    done: bool,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with default values.
    ///
    /// Defaults:
    /// - description: `"Task {id}"` where id is auto-incremented
    /// - done: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TaskFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            description: format!("Task {}", id),
            done: false,
        }
    }

    /// Sets the description for the task.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the completion flag for the task.
    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Builds and inserts the task entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::task::Model)` - Created task entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            description: ActiveValue::Set(self.description),
            done: ActiveValue::Set(self.done),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values.
///
/// Shorthand for `TaskFactory::new(db).build().await`.
pub async fn create_task(db: &DatabaseConnection) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db).build().await
}
