use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::model::assignment::CreateAssignmentParams;

/// Repository providing database operations for assignments.
pub struct AssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new assignment owned by the given course.
    ///
    /// The caller is responsible for having verified the course exists; the
    /// foreign key enforces it at the persistence layer either way.
    pub async fn create(
        &self,
        course_id: i32,
        params: CreateAssignmentParams,
    ) -> Result<entity::assignment::Model, DbErr> {
        entity::assignment::ActiveModel {
            title: ActiveValue::Set(params.title),
            due_date: ActiveValue::Set(params.due_date),
            course_id: ActiveValue::Set(course_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
