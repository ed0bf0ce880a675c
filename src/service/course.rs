//! Course service for business logic.
//!
//! Orchestrates course CRUD, roster mutation, and assignment creation over
//! the course, user, and assignment repositories.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        assignment::AssignmentRepository, course::CourseRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        assignment::{AssignmentDto, AssignmentWithCourse, CreateAssignmentParams},
        course::{AddUserParams, CourseDto, CreateCourseParams, EnrollmentRole},
    },
};

/// Service providing business logic for course management.
pub struct CourseService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all courses in full serialization.
    pub async fn get_all_courses(&self) -> Result<Vec<CourseDto>, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let courses = course_repo.get_all().await?;

        Ok(courses.into_iter().map(|c| c.into_dto()).collect())
    }

    /// Creates a course from validated parameters.
    pub async fn create_course(&self, params: CreateCourseParams) -> Result<CourseDto, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let course = course_repo.create(params).await?;

        Ok(course.into_dto())
    }

    /// Retrieves a course by id.
    ///
    /// # Returns
    /// - `Ok(CourseDto)` - Course found
    /// - `Err(AppError::NotFound)` - No course with that id
    pub async fn get_course(&self, course_id: i32) -> Result<CourseDto, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let course = course_repo
            .get_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("course not found".to_string()))?;

        Ok(course.into_dto())
    }

    /// Deletes a course and returns its state captured before deletion.
    pub async fn delete_course(&self, course_id: i32) -> Result<CourseDto, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let course = course_repo
            .get_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("course not found".to_string()))?;

        course_repo.delete(course_id).await?;

        Ok(course.into_dto())
    }

    /// Adds a user to one of a course's rosters.
    ///
    /// Lookup failures take precedence over role validation: course (404),
    /// user (404), then the role tag (400). Nothing is mutated before all
    /// three checks pass.
    pub async fn add_user(
        &self,
        course_id: i32,
        params: AddUserParams,
    ) -> Result<CourseDto, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("course not found".to_string()))?;

        user_repo
            .find_by_id(params.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        let role = EnrollmentRole::parse(&params.role)?;

        course_repo.enroll(course_id, params.user_id, role).await?;

        self.get_course(course_id).await
    }

    /// Creates an assignment under a course.
    ///
    /// # Returns
    /// - `Ok(AssignmentDto)` - Assignment created, owning course embedded in
    ///   summary form
    /// - `Err(AppError::NotFound)` - No course with that id
    pub async fn create_assignment(
        &self,
        course_id: i32,
        params: CreateAssignmentParams,
    ) -> Result<AssignmentDto, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let assignment_repo = AssignmentRepository::new(self.db);

        let course = course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("course not found".to_string()))?;

        let assignment = assignment_repo.create(course.id, params).await?;

        Ok(AssignmentWithCourse { assignment, course }.into_dto())
    }
}
