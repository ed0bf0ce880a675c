use super::*;

/// Tests fetching all courses in id order.
///
/// Expected: Ok with both courses, lowest id first
#[tokio::test]
async fn returns_all_courses_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course1 = factory::course::create_course(db).await?;
    let course2 = factory::course::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let courses = repo.get_all().await?;

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].course.id, course1.id);
    assert_eq!(courses[1].course.id, course2.id);

    Ok(())
}

/// Tests fetching all courses from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let courses = repo.get_all().await?;

    assert!(courses.is_empty());

    Ok(())
}

/// Tests that each course in the listing carries its own relations.
///
/// Expected: Ok with relations scoped to their owning course
#[tokio::test]
async fn scopes_relations_to_their_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course1 = factory::course::create_course(db).await?;
    let course2 = factory::course::create_course(db).await?;
    factory::assignment::create_assignment(db, course1.id).await?;

    let repo = CourseRepository::new(db);
    let courses = repo.get_all().await?;

    assert_eq!(courses[0].assignments.len(), 1);
    assert_eq!(courses[0].assignments[0].course_id, course1.id);
    assert!(courses[1].assignments.is_empty());
    assert_eq!(courses[1].course.id, course2.id);

    Ok(())
}
