use super::*;

/// Tests fetching a category with its linked tasks.
///
/// Expected: Ok(Some) with both linked tasks present
#[tokio::test]
async fn returns_category_with_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let task1 = factory::task::create_task(db).await?;
    let task2 = factory::task::create_task(db).await?;

    let task_repo = TaskRepository::new(db);
    task_repo.attach_category(task1.id, category.id).await?;
    task_repo.attach_category(task2.id, category.id).await?;

    let repo = CategoryRepository::new(db);
    let result = repo.get_by_id(category.id).await?;

    assert!(result.is_some());
    let with_tasks = result.unwrap();
    assert_eq!(with_tasks.category.id, category.id);
    assert_eq!(with_tasks.tasks.len(), 2);
    assert_eq!(with_tasks.tasks[0].id, task1.id);
    assert_eq!(with_tasks.tasks[1].id, task2.id);

    Ok(())
}

/// Tests querying for a non-existent category.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo.get_by_id(999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
