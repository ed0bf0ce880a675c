//! Subtask domain models and parameters.
//!
//! A subtask references its owner by scalar `task_id` only, so it has a
//! single DTO tier.

use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::api::missing_fields};

/// Request body for POST /api/tasks/{id}/subtasks/. `done` is optional and
/// defaults to false.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubtaskRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl CreateSubtaskRequest {
    pub fn into_params(self) -> Result<CreateSubtaskParams, AppError> {
        match self.description {
            Some(description) => Ok(CreateSubtaskParams {
                description,
                done: self.done.unwrap_or(false),
            }),
            None => Err(missing_fields(&["description"])),
        }
    }
}

/// Validated parameters for creating a subtask.
#[derive(Debug, Clone)]
pub struct CreateSubtaskParams {
    pub description: String,
    pub done: bool,
}

/// Serialization of a subtask. The owning task appears as its scalar id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtaskDto {
    pub id: i32,
    pub description: String,
    pub done: bool,
    pub task_id: i32,
}

impl SubtaskDto {
    pub fn from_entity(subtask: entity::subtask::Model) -> Self {
        Self {
            id: subtask.id,
            description: subtask.description,
            done: subtask.done,
            task_id: subtask.task_id,
        }
    }
}
