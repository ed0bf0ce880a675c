use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::task::{CreateTaskParams, TaskWithRelations};

/// Repository providing database operations for tasks.
///
/// Owns the task-category join table; both relationship views read from rows
/// inserted here.
pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new task. All relationship collections start empty.
    pub async fn create(&self, params: CreateTaskParams) -> Result<TaskWithRelations, DbErr> {
        let task = entity::task::ActiveModel {
            description: ActiveValue::Set(params.description),
            done: ActiveValue::Set(params.done),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TaskWithRelations {
            task,
            subtasks: Vec::new(),
            categories: Vec::new(),
        })
    }

    /// Finds a bare task row by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::task::Model>, DbErr> {
        entity::prelude::Task::find_by_id(id).one(self.db).await
    }

    /// Gets a task by primary key with its subtasks and categories.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<TaskWithRelations>, DbErr> {
        let task = entity::prelude::Task::find_by_id(id).one(self.db).await?;

        if let Some(task) = task {
            Ok(Some(self.load_relations(task).await?))
        } else {
            Ok(None)
        }
    }

    /// Gets all tasks with their relations, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<TaskWithRelations>, DbErr> {
        let tasks = entity::prelude::Task::find()
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        let mut results = Vec::new();
        for task in tasks {
            results.push(self.load_relations(task).await?);
        }

        Ok(results)
    }

    /// Deletes a task. Subtasks cascade at the persistence layer; join rows
    /// to categories cascade as well, leaving the categories themselves.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Task::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Links a task to a category.
    ///
    /// Inserts a single join-table row; repeating the link for the same
    /// (task, category) pair is a no-op.
    pub async fn attach_category(&self, task_id: i32, category_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::TaskCategory::find()
            .filter(entity::task_category::Column::TaskId.eq(task_id))
            .filter(entity::task_category::Column::CategoryId.eq(category_id))
            .count(self.db)
            .await?;

        if existing == 0 {
            entity::task_category::ActiveModel {
                task_id: ActiveValue::Set(task_id),
                category_id: ActiveValue::Set(category_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    async fn load_relations(&self, task: entity::task::Model) -> Result<TaskWithRelations, DbErr> {
        let subtasks = entity::prelude::Subtask::find()
            .filter(entity::subtask::Column::TaskId.eq(task.id))
            .order_by_asc(entity::subtask::Column::Id)
            .all(self.db)
            .await?;

        let category_ids: Vec<i32> = entity::prelude::TaskCategory::find()
            .filter(entity::task_category::Column::TaskId.eq(task.id))
            .order_by_asc(entity::task_category::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.category_id)
            .collect();

        let categories = if category_ids.is_empty() {
            Vec::new()
        } else {
            // Fetch all categories in one query, then restore link order
            let categories_map: HashMap<i32, entity::category::Model> =
                entity::prelude::Category::find()
                    .filter(entity::category::Column::Id.is_in(category_ids.clone()))
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|c| (c.id, c))
                    .collect();

            category_ids
                .into_iter()
                .filter_map(|id| categories_map.get(&id).cloned())
                .collect()
        };

        Ok(TaskWithRelations {
            task,
            subtasks,
            categories,
        })
    }
}
