use super::*;

/// Tests creating a new category.
///
/// Expected: Ok with category created and no linked tasks
#[tokio::test]
async fn creates_category_with_no_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            description: "school".to_string(),
            color: "#ff0000".to_string(),
        })
        .await?;

    assert_eq!(category.category.description, "school");
    assert_eq!(category.category.color, "#ff0000");
    assert!(category.tasks.is_empty());

    // Verify category exists in database
    let db_category = entity::prelude::Category::find_by_id(category.category.id)
        .one(db)
        .await?;
    assert!(db_category.is_some());

    Ok(())
}
