use super::*;

/// Tests linking a task to a category.
///
/// The link must be visible from both sides: the task's category list and
/// the category's task list read the same join row.
///
/// Expected: Ok with the link visible from both directions
#[tokio::test]
async fn link_is_visible_from_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;
    let category = factory::category::create_category(db).await?;

    let task_repo = TaskRepository::new(db);
    task_repo.attach_category(task.id, category.id).await?;

    let with_relations = task_repo.get_by_id(task.id).await?.unwrap();
    assert_eq!(with_relations.categories.len(), 1);
    assert_eq!(with_relations.categories[0].id, category.id);

    let category_repo = crate::data::category::CategoryRepository::new(db);
    let with_tasks = category_repo.get_by_id(category.id).await?.unwrap();
    assert_eq!(with_tasks.tasks.len(), 1);
    assert_eq!(with_tasks.tasks[0].id, task.id);

    Ok(())
}

/// Tests that repeating a link is a no-op.
///
/// Expected: Ok with a single join row after two identical links
#[tokio::test]
async fn repeated_link_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;
    let category = factory::category::create_category(db).await?;

    let repo = TaskRepository::new(db);
    repo.attach_category(task.id, category.id).await?;
    repo.attach_category(task.id, category.id).await?;

    let rows = entity::prelude::TaskCategory::find()
        .filter(entity::task_category::Column::TaskId.eq(task.id))
        .filter(entity::task_category::Column::CategoryId.eq(category.id))
        .count(db)
        .await?;
    assert_eq!(rows, 1);

    Ok(())
}
