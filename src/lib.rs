//! # todolist
//!
//! A small REST backend for to-do tasks with due dates.
//!
//! ## Features
//!
//! - **Task CRUD**: create, read, fully update, patch completion and delete
//! - **Due-date queries**: tasks due on a given day
//! - **Calendar counts**: uncompleted tasks per day and per day of a month,
//!   with `-1` marking days that have no tasks at all
//! - **SQLite storage**: versioned migrations, one shared connection
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::api::{router, AppState};
//! use todolist::db::{db::Db, tasks::Tasks};
//! use todolist::libs::service::TaskService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Db::open(std::path::Path::new("todolist.db"))?;
//!     let service = TaskService::new(Tasks::new(db));
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8081").await?;
//!     axum::serve(listener, router(AppState::new(service))).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
