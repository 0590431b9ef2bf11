//! HTTP surface of todolist.
//!
//! | Method & path                                      | Handler                                |
//! |----------------------------------------------------|----------------------------------------|
//! | `GET /tasks`                                       | [`tasks::get_all_tasks`]               |
//! | `GET /tasks/{id}`                                  | [`tasks::get_task`]                    |
//! | `POST /tasks/add`                                  | [`tasks::create_task`]                 |
//! | `PUT /tasks/{id}`                                  | [`tasks::update_task`]                 |
//! | `PATCH /tasks/{id}`                                | [`tasks::update_task_completion`]      |
//! | `DELETE /tasks/{id}`                               | [`tasks::delete_task`]                 |
//! | `GET /tasks/{id}/isCompleted`                      | [`tasks::is_task_completed`]           |
//! | `GET /tasks/due-date/{date}`                       | [`tasks::get_tasks_by_due_date`]       |
//! | `GET /tasks/uncompleted-count/{date}`              | [`tasks::uncompleted_count_by_date`]   |
//! | `GET /tasks/uncompleted-count/month/{year}/{month}`| [`tasks::uncompleted_count_by_month`]  |
//!
//! Requests from any origin are allowed.

pub mod error;
pub mod tasks;

use crate::libs::service::TaskService;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: TaskService,
}

impl AppState {
    pub fn new(service: TaskService) -> Self {
        AppState { service }
    }
}

/// Builds the router with all task routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(tasks::get_all_tasks))
        .route("/tasks/add", post(tasks::create_task))
        .route("/tasks/due-date/{date}", get(tasks::get_tasks_by_due_date))
        .route("/tasks/uncompleted-count/{date}", get(tasks::uncompleted_count_by_date))
        .route(
            "/tasks/uncompleted-count/month/{year}/{month}",
            get(tasks::uncompleted_count_by_month),
        )
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .patch(tasks::update_task_completion)
                .delete(tasks::delete_task),
        )
        .route("/tasks/{id}/isCompleted", get(tasks::is_task_completed))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
