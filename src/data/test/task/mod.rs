use crate::{data::task::TaskRepository, model::task::CreateTaskParams};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod attach_category;
mod create;
mod get_by_id;
