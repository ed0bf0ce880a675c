use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError, model::category::CreateCategoryRequest, service::category::CategoryService,
    state::AppState,
};

/// POST /api/categories/ - Create a category
///
/// # Request Body
/// - `description`: Category label (required)
/// - `color`: Display color (required)
///
/// # Returns
/// - `201 Created`: The new category in full serialization with an empty
///   tasks list
/// - `400 Bad Request`: A required field is absent or null
pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = body.into_params()?;

    let category_service = CategoryService::new(&state.db);
    let category = category_service.create_category(params).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/{category_id}/ - Get a category by id
///
/// # Returns
/// - `200 OK`: The category in full serialization, tasks in summary form
/// - `404 Not Found`: No category with that id
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category_service = CategoryService::new(&state.db);
    let category = category_service.get_category(category_id).await?;

    Ok((StatusCode::OK, Json(category)))
}
