use super::*;

/// Tests fetching a task with subtasks and categories loaded.
///
/// Expected: Ok(Some) with both collections filled
#[tokio::test]
async fn returns_task_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (task, subtask) = factory::helpers::create_task_with_subtask(db).await?;
    let category = factory::category::create_category(db).await?;

    let repo = TaskRepository::new(db);
    repo.attach_category(task.id, category.id).await?;

    let result = repo.get_by_id(task.id).await?;

    assert!(result.is_some());
    let with_relations = result.unwrap();
    assert_eq!(with_relations.task.id, task.id);
    assert_eq!(with_relations.subtasks.len(), 1);
    assert_eq!(with_relations.subtasks[0].id, subtask.id);
    assert_eq!(with_relations.categories.len(), 1);
    assert_eq!(with_relations.categories[0].id, category.id);

    Ok(())
}

/// Tests querying for a non-existent task.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let result = repo.get_by_id(999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
