//! Category domain models and parameters.
//!
//! A category's full DTO embeds its tasks in summary form; tasks embed
//! categories in summary form in return, so neither side can recurse.

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::{api::missing_fields, task::TaskSummaryDto},
};

/// Request body for POST /api/categories/.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl CreateCategoryRequest {
    pub fn into_params(self) -> Result<CreateCategoryParams, AppError> {
        let mut missing = Vec::new();
        if self.description.is_none() {
            missing.push("description");
        }
        if self.color.is_none() {
            missing.push("color");
        }

        match (self.description, self.color) {
            (Some(description), Some(color)) => {
                Ok(CreateCategoryParams { description, color })
            }
            _ => Err(missing_fields(&missing)),
        }
    }
}

/// Validated parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub description: String,
    pub color: String,
}

/// Full serialization of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i32,
    pub description: String,
    pub color: String,
    pub tasks: Vec<TaskSummaryDto>,
}

/// Simple serialization of a category: scalar fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummaryDto {
    pub id: i32,
    pub description: String,
    pub color: String,
}

impl CategorySummaryDto {
    pub fn from_entity(category: entity::category::Model) -> Self {
        Self {
            id: category.id,
            description: category.description,
            color: category.color,
        }
    }
}

/// Category row with the tasks it labels.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithTasks {
    pub category: entity::category::Model,
    pub tasks: Vec<entity::task::Model>,
}

impl CategoryWithTasks {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.category.id,
            description: self.category.description,
            color: self.category.color,
            tasks: self
                .tasks
                .into_iter()
                .map(TaskSummaryDto::from_entity)
                .collect(),
        }
    }
}
