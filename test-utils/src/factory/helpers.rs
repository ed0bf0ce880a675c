//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course together with one assignment.
///
/// Convenience method for tests that need an assignment without caring about
/// the owning course's fields.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((course, assignment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_assignment(
    db: &DatabaseConnection,
) -> Result<(entity::course::Model, entity::assignment::Model), DbErr> {
    let course = crate::factory::course::create_course(db).await?;
    let assignment = crate::factory::assignment::create_assignment(db, course.id).await?;

    Ok((course, assignment))
}

/// Creates a task together with one subtask.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((task, subtask))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_task_with_subtask(
    db: &DatabaseConnection,
) -> Result<(entity::task::Model, entity::subtask::Model), DbErr> {
    let task = crate::factory::task::create_task(db).await?;
    let subtask = crate::factory::subtask::create_subtask(db, task.id).await?;

    Ok((task, subtask))
}
