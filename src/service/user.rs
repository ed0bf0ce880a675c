//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UserDto, UserWithCourses},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user from validated parameters. The courses list starts
    /// empty.
    pub async fn create_user(&self, params: CreateUserParams) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.create(params).await?;

        Ok(UserWithCourses {
            user,
            courses: Vec::new(),
        }
        .into_dto())
    }

    /// Retrieves a user by id with the deduplicated union of their student
    /// and instructor courses.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .get_with_courses(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        Ok(user.into_dto())
    }
}
