use super::*;

/// Tests creating an assignment under a course.
///
/// Expected: Ok with assignment persisted and foreign key set
#[tokio::test]
async fn creates_assignment_for_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;

    let repo = AssignmentRepository::new(db);
    let assignment = repo
        .create(
            course.id,
            CreateAssignmentParams {
                title: "PA4".to_string(),
                due_date: 1_700_000_000,
            },
        )
        .await?;

    assert_eq!(assignment.title, "PA4");
    assert_eq!(assignment.due_date, 1_700_000_000);
    assert_eq!(assignment.course_id, course.id);

    // Verify assignment exists in database
    let db_assignment = entity::prelude::Assignment::find_by_id(assignment.id)
        .one(db)
        .await?;
    assert!(db_assignment.is_some());

    Ok(())
}
