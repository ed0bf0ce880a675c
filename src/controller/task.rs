use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        subtask::CreateSubtaskRequest,
        task::{AttachCategoryRequest, CreateTaskRequest, TaskListDto},
    },
    service::task::TaskService,
    state::AppState,
};

/// GET /api/tasks/ - Get all tasks
///
/// # Returns
/// - `200 OK`: `{"tasks": [...]}` with every task in full serialization
pub async fn get_all_tasks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let task_service = TaskService::new(&state.db);
    let tasks = task_service.get_all_tasks().await?;

    Ok((StatusCode::OK, Json(TaskListDto { tasks })))
}

/// POST /api/tasks/ - Create a task
///
/// # Request Body
/// - `description`: Task description (required)
/// - `done`: Completion flag (optional, defaults to false)
///
/// # Returns
/// - `201 Created`: The new task in full serialization
/// - `400 Bad Request`: Description absent or null
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = body.into_params()?;

    let task_service = TaskService::new(&state.db);
    let task = task_service.create_task(params).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/{task_id}/ - Get a task by id
///
/// # Returns
/// - `200 OK`: The task in full serialization
/// - `404 Not Found`: No task with that id
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let task_service = TaskService::new(&state.db);
    let task = task_service.get_task(task_id).await?;

    Ok((StatusCode::OK, Json(task)))
}

/// DELETE /api/tasks/{task_id}/ - Delete a task
///
/// Subtasks owned by the task are removed by the persistence layer's
/// cascade rule.
///
/// # Returns
/// - `200 OK`: The deleted task as it was before deletion
/// - `404 Not Found`: No task with that id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let task_service = TaskService::new(&state.db);
    let task = task_service.delete_task(task_id).await?;

    Ok((StatusCode::OK, Json(task)))
}

/// POST /api/tasks/{task_id}/subtasks/ - Create a subtask
///
/// # Request Body
/// - `description`: Subtask description (required)
/// - `done`: Completion flag (optional, defaults to false)
///
/// # Returns
/// - `201 Created`: The new subtask
/// - `400 Bad Request`: Description absent or null
/// - `404 Not Found`: No task with that id
pub async fn create_subtask(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
    Json(body): Json<CreateSubtaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = body.into_params()?;

    let task_service = TaskService::new(&state.db);
    let subtask = task_service.create_subtask(task_id, params).await?;

    Ok((StatusCode::CREATED, Json(subtask)))
}

/// POST /api/tasks/{task_id}/categories/ - Link a task to a category
///
/// # Request Body
/// - `category_id`: Id of an existing category (required)
///
/// # Returns
/// - `200 OK`: The task in full serialization including the category
/// - `400 Bad Request`: category_id absent or null
/// - `404 Not Found`: Task or category does not exist
pub async fn attach_category(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
    Json(body): Json<AttachCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = body.into_params()?;

    let task_service = TaskService::new(&state.db);
    let task = task_service.attach_category(task_id, params).await?;

    Ok((StatusCode::OK, Json(task)))
}
