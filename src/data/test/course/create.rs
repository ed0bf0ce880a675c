use super::*;

/// Tests creating a new course.
///
/// Verifies that the repository persists the scalar fields and that every
/// relationship collection of a fresh course starts empty.
///
/// Expected: Ok with course created and empty relations
#[tokio::test]
async fn creates_course_with_empty_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let result = repo
        .create(CreateCourseParams {
            code: "CS 1998".to_string(),
            name: "Intro to Backend Development".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let course = result.unwrap();
    assert_eq!(course.course.code, "CS 1998");
    assert_eq!(course.course.name, "Intro to Backend Development");
    assert!(course.assignments.is_empty());
    assert!(course.instructors.is_empty());
    assert!(course.students.is_empty());

    // Verify course exists in database
    let db_course = entity::prelude::Course::find_by_id(course.course.id)
        .one(db)
        .await?;
    assert!(db_course.is_some());
    assert_eq!(db_course.unwrap().code, "CS 1998");

    Ok(())
}

/// Tests that a created course reads back identically.
///
/// Creating a course and then fetching it by the returned id must yield the
/// same scalar fields and still-empty relationship collections.
///
/// Expected: Ok with matching scalars and empty relations
#[tokio::test]
async fn created_course_reads_back_identically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let created = repo
        .create(CreateCourseParams {
            code: "CS 2110".to_string(),
            name: "OO Programming and Data Structures".to_string(),
        })
        .await?;

    let fetched = repo.get_by_id(created.course.id).await?.unwrap();

    assert_eq!(fetched.course, created.course);
    assert!(fetched.assignments.is_empty());
    assert!(fetched.instructors.is_empty());
    assert!(fetched.students.is_empty());

    Ok(())
}
