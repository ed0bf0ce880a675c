//! Course domain models and parameters.
//!
//! Provides the course request/response DTOs, the creation parameters, and
//! the `EnrollmentRole` tag used by the add-user operation. A course's full
//! DTO embeds assignments and users in summary form only.

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::{
        api::missing_fields, assignment::AssignmentSummaryDto, user::UserSummaryDto,
    },
};

/// Role tag for placing a user on one of a course's two rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentRole {
    Student,
    Instructor,
}

impl EnrollmentRole {
    /// Parses the request `type` tag.
    ///
    /// # Returns
    /// - `Ok(EnrollmentRole)` - Tag is one of "student" or "instructor"
    /// - `Err(AppError::BadRequest)` - Any other value
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "student" => Ok(Self::Student),
            "instructor" => Ok(Self::Instructor),
            other => Err(AppError::BadRequest(format!(
                "invalid enrollment type '{}'",
                other
            ))),
        }
    }
}

/// Request body for POST /api/courses/.
///
/// Fields are optional at the serde layer so that absent and null inputs are
/// indistinguishable; `into_params` enforces presence.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateCourseRequest {
    /// Validates presence of all required fields.
    ///
    /// # Returns
    /// - `Ok(CreateCourseParams)` - All required fields present and non-null
    /// - `Err(AppError::BadRequest)` - Listing every missing field in order
    pub fn into_params(self) -> Result<CreateCourseParams, AppError> {
        let mut missing = Vec::new();
        if self.code.is_none() {
            missing.push("code");
        }
        if self.name.is_none() {
            missing.push("name");
        }

        match (self.code, self.name) {
            (Some(code), Some(name)) => Ok(CreateCourseParams { code, name }),
            _ => Err(missing_fields(&missing)),
        }
    }
}

/// Validated parameters for creating a course.
#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub code: String,
    pub name: String,
}

/// Request body for POST /api/courses/{id}/add/.
#[derive(Debug, Clone, Deserialize)]
pub struct AddUserRequest {
    #[serde(default)]
    pub user_id: Option<i32>,
    /// Raw role tag; validated against the allowed set after both entities
    /// have been looked up.
    #[serde(default, rename = "type")]
    pub role: Option<String>,
}

impl AddUserRequest {
    pub fn into_params(self) -> Result<AddUserParams, AppError> {
        let mut missing = Vec::new();
        if self.user_id.is_none() {
            missing.push("user_id");
        }
        if self.role.is_none() {
            missing.push("type");
        }

        match (self.user_id, self.role) {
            (Some(user_id), Some(role)) => Ok(AddUserParams { user_id, role }),
            _ => Err(missing_fields(&missing)),
        }
    }
}

/// Validated parameters for the add-user operation. The role tag stays a
/// string here; lookup failures take precedence over tag validation.
#[derive(Debug, Clone)]
pub struct AddUserParams {
    pub user_id: i32,
    pub role: String,
}

/// Full serialization of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub assignments: Vec<AssignmentSummaryDto>,
    pub instructors: Vec<UserSummaryDto>,
    pub students: Vec<UserSummaryDto>,
}

/// Simple serialization of a course: scalar fields only. Used wherever a
/// related entity would otherwise re-embed the course's own relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummaryDto {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl CourseSummaryDto {
    pub fn from_entity(course: entity::course::Model) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
        }
    }
}

/// Response body for GET /api/courses/.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseListDto {
    pub courses: Vec<CourseDto>,
}

/// Course row with its one-hop relations, assembled by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseWithRelations {
    pub course: entity::course::Model,
    pub assignments: Vec<entity::assignment::Model>,
    pub instructors: Vec<entity::user::Model>,
    pub students: Vec<entity::user::Model>,
}

impl CourseWithRelations {
    /// Converts the aggregate to the full course DTO, demoting every related
    /// entity to its summary form.
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.course.id,
            code: self.course.code,
            name: self.course.name,
            assignments: self
                .assignments
                .into_iter()
                .map(AssignmentSummaryDto::from_entity)
                .collect(),
            instructors: self
                .instructors
                .into_iter()
                .map(UserSummaryDto::from_entity)
                .collect(),
            students: self
                .students
                .into_iter()
                .map(UserSummaryDto::from_entity)
                .collect(),
        }
    }
}
