//! HTTP request handlers.
//!
//! Controllers extract and validate request data, delegate to the service
//! layer, and convert results into status-code/JSON responses. Errors
//! surface through `AppError`'s `IntoResponse` implementation.

pub mod category;
pub mod course;
pub mod task;
pub mod user;
