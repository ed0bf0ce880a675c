use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with user persisted and scalar fields intact
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Alice".to_string(),
            netid: "ab123".to_string(),
        })
        .await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(user.netid, "ab123");

    // Verify user exists in database
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());
    assert_eq!(db_user.unwrap().netid, "ab123");

    Ok(())
}
