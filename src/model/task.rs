//! Task domain models and parameters.

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::{api::missing_fields, category::CategorySummaryDto, subtask::SubtaskDto},
};

/// Request body for POST /api/tasks/. `done` is optional and defaults to
/// false.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl CreateTaskRequest {
    pub fn into_params(self) -> Result<CreateTaskParams, AppError> {
        match self.description {
            Some(description) => Ok(CreateTaskParams {
                description,
                done: self.done.unwrap_or(false),
            }),
            None => Err(missing_fields(&["description"])),
        }
    }
}

/// Validated parameters for creating a task.
#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub description: String,
    pub done: bool,
}

/// Request body for POST /api/tasks/{id}/categories/.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachCategoryRequest {
    #[serde(default)]
    pub category_id: Option<i32>,
}

impl AttachCategoryRequest {
    pub fn into_params(self) -> Result<AttachCategoryParams, AppError> {
        match self.category_id {
            Some(category_id) => Ok(AttachCategoryParams { category_id }),
            None => Err(missing_fields(&["category_id"])),
        }
    }
}

/// Validated parameters for linking a task to an existing category.
#[derive(Debug, Clone)]
pub struct AttachCategoryParams {
    pub category_id: i32,
}

/// Full serialization of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: i32,
    pub description: String,
    pub done: bool,
    pub subtasks: Vec<SubtaskDto>,
    pub categories: Vec<CategorySummaryDto>,
}

/// Simple serialization of a task: scalar fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummaryDto {
    pub id: i32,
    pub description: String,
    pub done: bool,
}

impl TaskSummaryDto {
    pub fn from_entity(task: entity::task::Model) -> Self {
        Self {
            id: task.id,
            description: task.description,
            done: task.done,
        }
    }
}

/// Response body for GET /api/tasks/.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskListDto {
    pub tasks: Vec<TaskDto>,
}

/// Task row with its one-hop relations, assembled by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskWithRelations {
    pub task: entity::task::Model,
    pub subtasks: Vec<entity::subtask::Model>,
    pub categories: Vec<entity::category::Model>,
}

impl TaskWithRelations {
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.task.id,
            description: self.task.description,
            done: self.task.done,
            subtasks: self
                .subtasks
                .into_iter()
                .map(SubtaskDto::from_entity)
                .collect(),
            categories: self
                .categories
                .into_iter()
                .map(CategorySummaryDto::from_entity)
                .collect(),
        }
    }
}
