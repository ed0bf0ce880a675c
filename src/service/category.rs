//! Category service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{CategoryDto, CreateCategoryParams},
};

/// Service providing business logic for category management.
pub struct CategoryService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category from validated parameters.
    pub async fn create_category(
        &self,
        params: CreateCategoryParams,
    ) -> Result<CategoryDto, AppError> {
        let category_repo = CategoryRepository::new(self.db);
        let category = category_repo.create(params).await?;

        Ok(category.into_dto())
    }

    /// Retrieves a category by id with the tasks it labels.
    ///
    /// # Returns
    /// - `Ok(CategoryDto)` - Category found
    /// - `Err(AppError::NotFound)` - No category with that id
    pub async fn get_category(&self, category_id: i32) -> Result<CategoryDto, AppError> {
        let category_repo = CategoryRepository::new(self.db);
        let category = category_repo
            .get_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::NotFound("category not found".to_string()))?;

        Ok(category.into_dto())
    }
}
