use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Builds the 400 error for absent-or-null required fields.
///
/// `missing` holds the field names in declaration order; absent and
/// explicitly-null values are treated identically by the request DTOs.
pub fn missing_fields(missing: &[&str]) -> AppError {
    AppError::BadRequest(format!("missing required fields: {}", missing.join(", ")))
}
