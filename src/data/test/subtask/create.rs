use super::*;

/// Tests creating a subtask under an existing task.
///
/// Expected: Ok with subtask persisted and foreign key set
#[tokio::test]
async fn creates_subtask_for_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;

    let repo = SubtaskRepository::new(db);
    let subtask = repo
        .create(
            task.id,
            CreateSubtaskParams {
                description: "read chapter 3".to_string(),
                done: false,
            },
        )
        .await?;

    assert_eq!(subtask.description, "read chapter 3");
    assert!(!subtask.done);
    assert_eq!(subtask.task_id, task.id);

    // Verify subtask exists in database
    let db_subtask = entity::prelude::Subtask::find_by_id(subtask.id).one(db).await?;
    assert!(db_subtask.is_some());

    Ok(())
}
