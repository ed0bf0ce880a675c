use super::*;

/// Tests enrolling a user as a student.
///
/// Expected: Ok with the user on the student roster only
#[tokio::test]
async fn enrolls_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = CourseRepository::new(db);
    repo.enroll(course.id, user.id, EnrollmentRole::Student)
        .await?;

    let with_relations = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(with_relations.students.len(), 1);
    assert_eq!(with_relations.students[0].id, user.id);
    assert!(with_relations.instructors.is_empty());

    Ok(())
}

/// Tests that the two rosters are independent collections.
///
/// The same user may hold both roles in one course; each role lives in its
/// own join table.
///
/// Expected: Ok with the user on both rosters
#[tokio::test]
async fn same_user_can_hold_both_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = CourseRepository::new(db);
    repo.enroll(course.id, user.id, EnrollmentRole::Student)
        .await?;
    repo.enroll(course.id, user.id, EnrollmentRole::Instructor)
        .await?;

    let with_relations = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(with_relations.students.len(), 1);
    assert_eq!(with_relations.instructors.len(), 1);
    assert_eq!(with_relations.students[0].id, user.id);
    assert_eq!(with_relations.instructors[0].id, user.id);

    Ok(())
}

/// Tests that repeating an enroll is a no-op.
///
/// Expected: Ok with a single join row after two identical enrolls
#[tokio::test]
async fn repeated_enroll_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = CourseRepository::new(db);
    repo.enroll(course.id, user.id, EnrollmentRole::Student)
        .await?;
    repo.enroll(course.id, user.id, EnrollmentRole::Student)
        .await?;

    let rows = entity::prelude::CourseStudent::find()
        .filter(entity::course_student::Column::CourseId.eq(course.id))
        .filter(entity::course_student::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests that both sides of the relation see the same join row.
///
/// Enrolling through the course must be visible from the user's side without
/// any extra bookkeeping: the collections are two views of one table.
///
/// Expected: Ok with the course in the user's course set
#[tokio::test]
async fn enrollment_is_visible_from_both_sides() -> Result<(), DbErr> {
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

    let user_repo = crate::data::user::UserRepository::new(db);
    let with_courses = user_repo.get_with_courses(user.id).await?.unwrap();

    assert_eq!(with_courses.courses.len(), 1);
    assert_eq!(with_courses.courses[0].id, course.id);

    Ok(())
}
