use super::*;

/// Tests creating a new task.
///
/// Expected: Ok with task created and empty relations
#[tokio::test]
async fn creates_task_with_empty_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let task = repo
        .create(CreateTaskParams {
            description: "finish the lab".to_string(),
            done: false,
        })
        .await?;

    assert_eq!(task.task.description, "finish the lab");
    assert!(!task.task.done);
    assert!(task.subtasks.is_empty());
    assert!(task.categories.is_empty());

    // Verify task exists in database
    let db_task = entity::prelude::Task::find_by_id(task.task.id).one(db).await?;
    assert!(db_task.is_some());

    Ok(())
}

/// Tests creating a task that is already done.
///
/// Expected: Ok with the done flag persisted
#[tokio::test]
async fn creates_completed_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let task = repo
        .create(CreateTaskParams {
            description: "submit the report".to_string(),
            done: true,
        })
        .await?;

    assert!(task.task.done);

    Ok(())
}
