//! Task service for business logic.
//!
//! Orchestrates task CRUD, subtask creation, and category linking over the
//! task, subtask, and category repositories.

use sea_orm::DatabaseConnection;

use crate::{
    data::{category::CategoryRepository, subtask::SubtaskRepository, task::TaskRepository},
    error::AppError,
    model::{
        subtask::{CreateSubtaskParams, SubtaskDto},
        task::{AttachCategoryParams, CreateTaskParams, TaskDto},
    },
};

/// Service providing business logic for task management.
pub struct TaskService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all tasks in full serialization.
    pub async fn get_all_tasks(&self) -> Result<Vec<TaskDto>, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let tasks = task_repo.get_all().await?;

        Ok(tasks.into_iter().map(|t| t.into_dto()).collect())
    }

    /// Creates a task from validated parameters.
    pub async fn create_task(&self, params: CreateTaskParams) -> Result<TaskDto, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let task = task_repo.create(params).await?;

        Ok(task.into_dto())
    }

    /// Retrieves a task by id.
    ///
    /// # Returns
    /// - `Ok(TaskDto)` - Task found
    /// - `Err(AppError::NotFound)` - No task with that id
    pub async fn get_task(&self, task_id: i32) -> Result<TaskDto, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let task = task_repo
            .get_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("task not found".to_string()))?;

        Ok(task.into_dto())
    }

    /// Deletes a task and returns its state captured before deletion.
    pub async fn delete_task(&self, task_id: i32) -> Result<TaskDto, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let task = task_repo
            .get_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("task not found".to_string()))?;

        task_repo.delete(task_id).await?;

        Ok(task.into_dto())
    }

    /// Creates a subtask under a task. The owning task must exist first.
    pub async fn create_subtask(
        &self,
        task_id: i32,
        params: CreateSubtaskParams,
    ) -> Result<SubtaskDto, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let subtask_repo = SubtaskRepository::new(self.db);

        let task = task_repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("task not found".to_string()))?;

        let subtask = subtask_repo.create(task.id, params).await?;

        Ok(SubtaskDto::from_entity(subtask))
    }

    /// Links a task to an existing category.
    ///
    /// Both entities are looked up before the join row is written; a repeat
    /// link is a no-op.
    pub async fn attach_category(
        &self,
        task_id: i32,
        params: AttachCategoryParams,
    ) -> Result<TaskDto, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let category_repo = CategoryRepository::new(self.db);

        task_repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("task not found".to_string()))?;

        category_repo
            .find_by_id(params.category_id)
            .await?
            .ok_or_else(|| AppError::NotFound("category not found".to_string()))?;

        task_repo.attach_category(task_id, params.category_id).await?;

        self.get_task(task_id).await
    }
}
