//! SQLite persistence for tasks.
//!
//! - [`db::Db`]: shared connection handle, opened with migrations applied
//! - [`migrations`]: versioned schema changes tracked in the `migrations` table
//! - [`tasks::Tasks`]: repository for the `tasks` table
//! - [`error::StoreError`]: errors raised by this layer
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use todolist::db::{db::Db, tasks::Tasks};
//! use todolist::libs::task::Task;
//!
//! let tasks = Tasks::new(Db::open(std::path::Path::new("todolist.db"))?);
//! let due = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let saved = tasks.save(&Task::new("Review code", None, due))?;
//! assert!(saved.id.is_some());
//! # Ok::<(), todolist::db::error::StoreError>(())
//! ```

/// Connection management and database opening.
pub mod db;

/// Storage error type.
pub mod error;

/// Versioned schema migrations.
pub mod migrations;

/// Task table queries: find, save and delete.
pub mod tasks;
