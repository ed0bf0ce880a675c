use crate::{
    data::course::CourseRepository,
    model::course::{CreateCourseParams, EnrollmentRole},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod enroll;
mod get_all;
mod get_by_id;
