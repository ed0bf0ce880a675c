//! Business logic orchestration between controllers and the data layer.
//!
//! Services own the not-found and bad-request decisions: repositories return
//! `Option`s and the services convert absence into `AppError::NotFound` with
//! the entity's response message.

pub mod category;
pub mod course;
pub mod task;
pub mod user;

#[cfg(test)]
mod test;
