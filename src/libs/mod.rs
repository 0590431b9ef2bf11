//! Core library modules for todolist.
//!
//! - **Domain**: the [`task::Task`] entity and request bodies
//! - **Service**: [`service::TaskService`], the operations behind every route
//! - **Aggregation**: [`summary`] day and month uncompleted counts
//! - **Infrastructure**: configuration, data directory, messages, errors
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use todolist::db::{db::Db, tasks::Tasks};
//! use todolist::libs::{service::TaskService, task::Task};
//!
//! let service = TaskService::new(Tasks::new(Db::open(std::path::Path::new("todolist.db"))?));
//! let due = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! service.save_task(Task::new("Implement feature", None, due))?;
//! assert_eq!(service.uncompleted_count_by_date(due)?, 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod service;
pub mod summary;
pub mod task;
