//! Assignment factory for creating test assignment entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test assignments with customizable fields.
///
/// Assignments require an owning course; create one first (for example via
/// the course factory) and pass its id.
pub struct AssignmentFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    due_date: i64,
    course_id: i32,
}

impl<'a> AssignmentFactory<'a> {
    /// Creates a new AssignmentFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Assignment {id}"` where id is auto-incremented
    /// - due_date: fixed unix timestamp in the schedule's future
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `course_id` - Id of the owning course
    ///
    /// # Returns
    /// - `AssignmentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, course_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Assignment {}", id),
            due_date: 1_893_456_000,
            course_id,
        }
    }

    /// Sets the title for the assignment.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the due date (unix seconds) for the assignment.
    pub fn due_date(mut self, due_date: i64) -> Self {
        self.due_date = due_date;
        self
    }

    /// Builds and inserts the assignment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::assignment::Model)` - Created assignment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::assignment::Model, DbErr> {
        entity::assignment::ActiveModel {
            title: ActiveValue::Set(self.title),
            due_date: ActiveValue::Set(self.due_date),
            course_id: ActiveValue::Set(self.course_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an assignment with default values under the given course.
///
/// Shorthand for `AssignmentFactory::new(db, course_id).build().await`.
pub async fn create_assignment(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::assignment::Model, DbErr> {
    AssignmentFactory::new(db, course_id).build().await
}
