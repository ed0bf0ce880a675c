//! User domain models and parameters.
//!
//! A user's full DTO carries the deduplicated union of their student and
//! instructor courses in summary form; the summary DTO is what course
//! rosters embed, keeping Course→User→Course cycles impossible.

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::{api::missing_fields, course::CourseSummaryDto},
};

/// Request body for POST /api/users/.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub netid: Option<String>,
}

impl CreateUserRequest {
    pub fn into_params(self) -> Result<CreateUserParams, AppError> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.netid.is_none() {
            missing.push("netid");
        }

        match (self.name, self.netid) {
            (Some(name), Some(netid)) => Ok(CreateUserParams { name, netid }),
            _ => Err(missing_fields(&missing)),
        }
    }
}

/// Validated parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub netid: String,
}

/// Full serialization of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub netid: String,
    pub courses: Vec<CourseSummaryDto>,
}

/// Simple serialization of a user: scalar fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub netid: String,
}

impl UserSummaryDto {
    pub fn from_entity(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            netid: user.netid,
        }
    }
}

/// User row with the deduplicated union of their courses, assembled by the
/// repository (student courses first, then instructor courses not already
/// present).
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithCourses {
    pub user: entity::user::Model,
    pub courses: Vec<entity::course::Model>,
}

impl UserWithCourses {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.user.id,
            name: self.user.name,
            netid: self.user.netid,
            courses: self
                .courses
                .into_iter()
                .map(CourseSummaryDto::from_entity)
                .collect(),
        }
    }
}
