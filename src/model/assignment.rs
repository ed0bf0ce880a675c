//! Assignment domain models and parameters.
//!
//! An assignment's full DTO embeds its owning course in summary form, so the
//! course does not re-embed its assignment list.

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::{api::missing_fields, course::CourseSummaryDto},
};

/// Request body for POST /api/courses/{id}/assignment/.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    #[serde(default)]
    pub title: Option<String>,
    /// Due date as a unix timestamp in seconds.
    #[serde(default)]
    pub due_date: Option<i64>,
}

impl CreateAssignmentRequest {
    pub fn into_params(self) -> Result<CreateAssignmentParams, AppError> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.due_date.is_none() {
            missing.push("due_date");
        }

        match (self.title, self.due_date) {
            (Some(title), Some(due_date)) => Ok(CreateAssignmentParams { title, due_date }),
            _ => Err(missing_fields(&missing)),
        }
    }
}

/// Validated parameters for creating an assignment.
#[derive(Debug, Clone)]
pub struct CreateAssignmentParams {
    pub title: String,
    pub due_date: i64,
}

/// Full serialization of an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDto {
    pub id: i32,
    pub title: String,
    pub due_date: i64,
    pub course: CourseSummaryDto,
}

/// Simple serialization of an assignment: scalar fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSummaryDto {
    pub id: i32,
    pub title: String,
    pub due_date: i64,
}

impl AssignmentSummaryDto {
    pub fn from_entity(assignment: entity::assignment::Model) -> Self {
        Self {
            id: assignment.id,
            title: assignment.title,
            due_date: assignment.due_date,
        }
    }
}

/// Assignment row paired with its owning course.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentWithCourse {
    pub assignment: entity::assignment::Model,
    pub course: entity::course::Model,
}

impl AssignmentWithCourse {
    pub fn into_dto(self) -> AssignmentDto {
        AssignmentDto {
            id: self.assignment.id,
            title: self.assignment.title,
            due_date: self.assignment.due_date,
            course: CourseSummaryDto::from_entity(self.course),
        }
    }
}
