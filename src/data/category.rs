use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::category::{CategoryWithTasks, CreateCategoryParams};

/// Repository providing database operations for categories.
pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category with no linked tasks.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<CategoryWithTasks, DbErr> {
        let category = entity::category::ActiveModel {
            description: ActiveValue::Set(params.description),
            color: ActiveValue::Set(params.color),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CategoryWithTasks {
            category,
            tasks: Vec::new(),
        })
    }

    /// Finds a bare category row by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Gets a category by primary key with the tasks it labels.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CategoryWithTasks>, DbErr> {
        let category = entity::prelude::Category::find_by_id(id).one(self.db).await?;

        let category = match category {
            Some(category) => category,
            None => return Ok(None),
        };

        let task_ids: Vec<i32> = entity::prelude::TaskCategory::find()
            .filter(entity::task_category::Column::CategoryId.eq(id))
            .order_by_asc(entity::task_category::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.task_id)
            .collect();

        let tasks = if task_ids.is_empty() {
            Vec::new()
        } else {
            let tasks_map: HashMap<i32, entity::task::Model> = entity::prelude::Task::find()
                .filter(entity::task::Column::Id.is_in(task_ids.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.id, t))
                .collect();

            task_ids
                .into_iter()
                .filter_map(|task_id| tasks_map.get(&task_id).cloned())
                .collect()
        };

        Ok(Some(CategoryWithTasks { category, tasks }))
    }
}
