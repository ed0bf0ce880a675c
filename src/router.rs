use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    controller::{category, course, task, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/courses/",
            get(course::get_all_courses).post(course::create_course),
        )
        .route(
            "/api/courses/{course_id}/",
            get(course::get_course).delete(course::delete_course),
        )
        .route("/api/courses/{course_id}/add/", post(course::add_user_to_course))
        .route(
            "/api/courses/{course_id}/assignment/",
            post(course::create_assignment),
        )
        .route("/api/users/", post(user::create_user))
        .route("/api/users/{user_id}/", get(user::get_user))
        .route("/api/tasks/", get(task::get_all_tasks).post(task::create_task))
        .route(
            "/api/tasks/{task_id}/",
            get(task::get_task).delete(task::delete_task),
        )
        .route("/api/tasks/{task_id}/subtasks/", post(task::create_subtask))
        .route("/api/tasks/{task_id}/categories/", post(task::attach_category))
        .route("/api/categories/", post(category::create_category))
        .route("/api/categories/{category_id}/", get(category::get_category))
        .layer(CorsLayer::permissive())
}
