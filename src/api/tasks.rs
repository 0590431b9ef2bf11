//! Handlers for the `/tasks` routes.

use super::error::ApiError;
use super::AppState;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::summary::parse_date;
use crate::libs::task::{CompletionUpdate, Task};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::BTreeMap;

/// GET /tasks
pub async fn get_all_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.service.get_all_tasks()?))
}

/// GET /tasks/{id}
pub async fn get_task(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.service.get_task_by_id(id)?))
}

/// POST /tasks/add
pub async fn create_task(State(state): State<AppState>, Json(task): Json<Task>) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.service.save_task(task)?))
}

/// PUT /tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(task): Json<Task>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.service.update_task(id, task)?))
}

/// PATCH /tasks/{id}
pub async fn update_task_completion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<CompletionUpdate>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.service.update_task_completion(id, update.is_completed)?))
}

/// GET /tasks/{id}/isCompleted
///
/// A missing task is a bare 404 with an empty body.
pub async fn is_task_completed(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.service.is_task_completed(id) {
        Ok(completed) => Json(completed).into_response(),
        Err(TaskError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /tasks/due-date/{date}
pub async fn get_tasks_by_due_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let due_date = parse_date(&date)?;
    Ok(Json(state.service.get_tasks_by_due_date(due_date)?))
}

/// GET /tasks/uncompleted-count/{date}
pub async fn uncompleted_count_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<i32>, ApiError> {
    let due_date = parse_date(&date)?;
    Ok(Json(state.service.uncompleted_count_by_date(due_date)?))
}

/// GET /tasks/uncompleted-count/month/{year}/{month}
pub async fn uncompleted_count_by_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<BTreeMap<u32, i32>>, ApiError> {
    Ok(Json(state.service.uncompleted_count_by_month(year, month)?))
}

/// DELETE /tasks/{id}
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> Result<String, ApiError> {
    state.service.delete_task(id)?;
    Ok(Message::TaskDeleted(id).to_string())
}
