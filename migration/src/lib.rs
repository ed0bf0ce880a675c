pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_course_table;
mod m20260801_000002_create_user_table;
mod m20260801_000003_create_assignment_table;
mod m20260801_000004_create_course_instructor_table;
mod m20260801_000005_create_course_student_table;
mod m20260802_000006_create_task_table;
mod m20260802_000007_create_category_table;
mod m20260802_000008_create_subtask_table;
mod m20260802_000009_create_task_category_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_course_table::Migration),
            Box::new(m20260801_000002_create_user_table::Migration),
            Box::new(m20260801_000003_create_assignment_table::Migration),
            Box::new(m20260801_000004_create_course_instructor_table::Migration),
            Box::new(m20260801_000005_create_course_student_table::Migration),
            Box::new(m20260802_000006_create_task_table::Migration),
            Box::new(m20260802_000007_create_category_table::Migration),
            Box::new(m20260802_000008_create_subtask_table::Migration),
            Box::new(m20260802_000009_create_task_category_table::Migration),
        ]
    }
}
