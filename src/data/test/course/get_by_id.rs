use super::*;

/// Tests fetching a course with all one-hop relations loaded.
///
/// Builds a course with an assignment, an instructor, and a student, then
/// verifies that get_by_id returns all three collections populated.
///
/// Expected: Ok(Some) with assignment and both rosters filled
#[tokio::test]
async fn returns_course_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let assignment = factory::assignment::create_assignment(db, course.id).await?;
    let instructor = factory::user::create_user(db).await?;
    let student = factory::user::create_user(db).await?;

    let repo = CourseRepository::new(db);
    repo.enroll(course.id, instructor.id, EnrollmentRole::Instructor)
        .await?;
    repo.enroll(course.id, student.id, EnrollmentRole::Student)
        .await?;

    let result = repo.get_by_id(course.id).await?;

    assert!(result.is_some());
    let with_relations = result.unwrap();
    assert_eq!(with_relations.course.id, course.id);
    assert_eq!(with_relations.assignments.len(), 1);
    assert_eq!(with_relations.assignments[0].id, assignment.id);
    assert_eq!(with_relations.instructors.len(), 1);
    assert_eq!(with_relations.instructors[0].id, instructor.id);
    assert_eq!(with_relations.students.len(), 1);
    assert_eq!(with_relations.students[0].id, student.id);

    Ok(())
}

/// Tests querying for a non-existent course.
///
/// The not-found condition is part of the normal contract: the repository
/// must return None rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let result = repo.get_by_id(999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
