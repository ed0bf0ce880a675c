use super::*;

/// Tests that deleting a course removes its assignments.
///
/// The cascade is enforced by the persistence layer's foreign key rule, not
/// by handler iteration; the assignment rows are checked with a direct
/// query.
///
/// Expected: Ok with zero assignment rows remaining
#[tokio::test]
async fn cascade_deletes_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    factory::assignment::create_assignment(db, course.id).await?;
    factory::assignment::create_assignment(db, course.id).await?;
    factory::assignment::create_assignment(db, course.id).await?;

    let repo = CourseRepository::new(db);
    repo.delete(course.id).await?;

    let course_count = entity::prelude::Course::find()
        .filter(entity::course::Column::Id.eq(course.id))
        .count(db)
        .await?;
    assert_eq!(course_count, 0);

    let assignment_count = entity::prelude::Assignment::find()
        .filter(entity::assignment::Column::CourseId.eq(course.id))
        .count(db)
        .await?;
    assert_eq!(assignment_count, 0);

    Ok(())
}

/// Tests that deleting a course removes its join rows but not the users.
///
/// Expected: Ok with empty rosters and the user row intact
#[tokio::test]
async fn cascade_deletes_roster_rows_but_keeps_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = CourseRepository::new(db);
    repo.enroll(course.id, user.id, EnrollmentRole::Instructor)
        .await?;
    repo.enroll(course.id, user.id, EnrollmentRole::Student)
        .await?;

    repo.delete(course.id).await?;

    let instructor_rows = entity::prelude::CourseInstructor::find()
        .filter(entity::course_instructor::Column::CourseId.eq(course.id))
        .count(db)
        .await?;
    assert_eq!(instructor_rows, 0);

    let student_rows = entity::prelude::CourseStudent::find()
        .filter(entity::course_student::Column::CourseId.eq(course.id))
        .count(db)
        .await?;
    assert_eq!(student_rows, 0);

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());

    Ok(())
}

/// Tests that deleting one course leaves other courses untouched.
///
/// Expected: Ok with the sibling course and its assignment intact
#[tokio::test]
async fn leaves_other_courses_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doomed, _) = factory::helpers::create_course_with_assignment(db).await?;
    let (_, kept_assignment) = factory::helpers::create_course_with_assignment(db).await?;

    let repo = CourseRepository::new(db);
    repo.delete(doomed.id).await?;

    let remaining = entity::prelude::Assignment::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept_assignment.id);

    Ok(())
}
