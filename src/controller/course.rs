use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        assignment::CreateAssignmentRequest,
        course::{AddUserRequest, CourseListDto, CreateCourseRequest},
    },
    service::course::CourseService,
    state::AppState,
};

/// GET /api/courses/ - Get all courses
///
/// # Returns
/// - `200 OK`: `{"courses": [...]}` with every course in full serialization
pub async fn get_all_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let course_service = CourseService::new(&state.db);
    let courses = course_service.get_all_courses().await?;

    Ok((StatusCode::OK, Json(CourseListDto { courses })))
}

/// POST /api/courses/ - Create a course
///
/// # Request Body
/// - `code`: Course code (required)
/// - `name`: Course name (required)
///
/// # Returns
/// - `201 Created`: The new course in full serialization, with empty
///   assignment and roster collections
/// - `400 Bad Request`: A required field is absent or null
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = body.into_params()?;

    let course_service = CourseService::new(&state.db);
    let course = course_service.create_course(params).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/courses/{course_id}/ - Get a course by id
///
/// # Returns
/// - `200 OK`: The course in full serialization
/// - `404 Not Found`: No course with that id
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course_service = CourseService::new(&state.db);
    let course = course_service.get_course(course_id).await?;

    Ok((StatusCode::OK, Json(course)))
}

/// DELETE /api/courses/{course_id}/ - Delete a course
///
/// Assignments owned by the course are removed by the persistence layer's
/// cascade rule.
///
/// # Returns
/// - `200 OK`: The deleted course as it was before deletion
/// - `404 Not Found`: No course with that id
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course_service = CourseService::new(&state.db);
    let course = course_service.delete_course(course_id).await?;

    Ok((StatusCode::OK, Json(course)))
}

/// POST /api/courses/{course_id}/add/ - Add a user to a course roster
///
/// # Request Body
/// - `user_id`: Id of the user to add (required)
/// - `type`: "student" or "instructor" (required)
///
/// # Returns
/// - `200 OK`: The course in full serialization including the added user
/// - `400 Bad Request`: Missing field, or `type` outside the allowed set
/// - `404 Not Found`: Course or user does not exist
pub async fn add_user_to_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(body): Json<AddUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = body.into_params()?;

    let course_service = CourseService::new(&state.db);
    let course = course_service.add_user(course_id, params).await?;

    Ok((StatusCode::OK, Json(course)))
}

/// POST /api/courses/{course_id}/assignment/ - Create an assignment
///
/// # Request Body
/// - `title`: Assignment title (required)
/// - `due_date`: Unix timestamp in seconds (required)
///
/// # Returns
/// - `201 Created`: The new assignment with its course in summary form
/// - `400 Bad Request`: A required field is absent or null
/// - `404 Not Found`: No course with that id
pub async fn create_assignment(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(body): Json<CreateAssignmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = body.into_params()?;

    let course_service = CourseService::new(&state.db);
    let assignment = course_service.create_assignment(course_id, params).await?;

    Ok((StatusCode::CREATED, Json(assignment)))
}
