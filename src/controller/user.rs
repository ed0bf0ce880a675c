use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError, model::user::CreateUserRequest, service::user::UserService, state::AppState,
};

/// POST /api/users/ - Create a user
///
/// # Request Body
/// - `name`: Display name (required)
/// - `netid`: Campus netid (required)
///
/// # Returns
/// - `201 Created`: The new user in full serialization with an empty
///   courses list
/// - `400 Bad Request`: A required field is absent or null
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = body.into_params()?;

    let user_service = UserService::new(&state.db);
    let user = user_service.create_user(params).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{user_id}/ - Get a user by id
///
/// The courses list is the union of the user's student and instructor
/// courses, deduplicated by course id.
///
/// # Returns
/// - `200 OK`: The user in full serialization
/// - `404 Not Found`: No user with that id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let user = user_service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}
