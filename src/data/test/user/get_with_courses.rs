use super::*;

/// Tests the deduplicated course union.
///
/// A user enrolled in the same course as both student and instructor must
/// see that course exactly once in their course set.
///
/// Expected: Ok with a single entry for the doubly-held course
#[tokio::test]
async fn deduplicates_courses_held_in_both_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let user = factory::user::create_user(db).await?;

    let course_repo = CourseRepository::new(db);
    course_repo
        .enroll(course.id, user.id, EnrollmentRole::Student)
        .await?;
    course_repo
        .enroll(course.id, user.id, EnrollmentRole::Instructor)
        .await?;

    let user_repo = UserRepository::new(db);
    let with_courses = user_repo.get_with_courses(user.id).await?.unwrap();

    assert_eq!(with_courses.courses.len(), 1);
    assert_eq!(with_courses.courses[0].id, course.id);

    Ok(())
}

/// Tests the union across distinct courses and roles.
///
/// Student courses come first, then instructor courses not already present.
///
/// Expected: Ok with both courses, student course first
#[tokio::test]
async fn unions_student_and_instructor_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let taught = factory::course::create_course(db).await?;
    let taken = factory::course::create_course(db).await?;
    let user = factory::user::create_user(db).await?;

    let course_repo = CourseRepository::new(db);
    course_repo
        .enroll(taught.id, user.id, EnrollmentRole::Instructor)
        .await?;
    course_repo
        .enroll(taken.id, user.id, EnrollmentRole::Student)
        .await?;

    let user_repo = UserRepository::new(db);
    let with_courses = user_repo.get_with_courses(user.id).await?.unwrap();

    assert_eq!(with_courses.courses.len(), 2);
    assert_eq!(with_courses.courses[0].id, taken.id);
    assert_eq!(with_courses.courses[1].id, taught.id);

    Ok(())
}

/// Tests a user with no enrollments.
///
/// Expected: Ok(Some) with an empty course set
#[tokio::test]
async fn returns_empty_courses_for_unenrolled_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let user_repo = UserRepository::new(db);
    let with_courses = user_repo.get_with_courses(user.id).await?.unwrap();

    assert!(with_courses.courses.is_empty());

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user_repo = UserRepository::new(db);
    let result = user_repo.get_with_courses(999).await?;

    assert!(result.is_none());

    Ok(())
}
