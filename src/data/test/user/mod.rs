use crate::{
    data::{course::CourseRepository, user::UserRepository},
    model::{course::EnrollmentRole, user::CreateUserParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_with_courses;
