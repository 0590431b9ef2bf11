//! Repository over the `tasks` table.
//!
//! ## Schema
//!
//! | Column         | Type    | Notes                                   |
//! |----------------|---------|-----------------------------------------|
//! | `id`           | INTEGER | `AUTOINCREMENT`, never reused           |
//! | `name`         | TEXT    | required                                |
//! | `description`  | TEXT    | nullable                                |
//! | `due_date`     | DATE    | `YYYY-MM-DD` text, indexed              |
//! | `is_completed` | BOOLEAN | defaults to false                       |
//!
//! Every query takes the shared connection lock for its whole duration
//! through [`Db::with_conn`]. Results come back ordered by id.

use super::db::Db;
use super::error::StoreError;
use crate::libs::task::Task;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};
use tracing::instrument;

const SELECT_TASKS: &str = "SELECT id, name, description, due_date, is_completed FROM tasks";
const ORDER_BY_ID: &str = "ORDER BY id";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_DUE_DATE: &str = "WHERE due_date = ?1";
const WHERE_DUE_DATE_BETWEEN: &str = "WHERE due_date BETWEEN ?1 AND ?2";
const INSERT_TASK: &str = "INSERT INTO tasks (name, description, due_date, is_completed) VALUES (?1, ?2, ?3, ?4)";
const UPSERT_TASK: &str = "INSERT INTO tasks (id, name, description, due_date, is_completed) VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        description = excluded.description,
        due_date = excluded.due_date,
        is_completed = excluded.is_completed";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Repository over the `tasks` table. Clones share one connection.
#[derive(Clone)]
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(db: Db) -> Self {
        Tasks { db }
    }

    /// All tasks.
    #[instrument(skip(self))]
    pub fn find_all(&self) -> Result<Vec<Task>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?;
            let tasks = stmt.query_map([], map_task)?.collect::<Result<Vec<_>, _>>()?;
            Ok(tasks)
        })
    }

    /// The task with `id`, or `None`.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: i64) -> Result<Option<Task>, StoreError> {
        self.db.with_conn(|conn| {
            let task = conn
                .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), [id], map_task)
                .optional()?;
            Ok(task)
        })
    }

    /// Tasks due on `due_date`.
    #[instrument(skip(self))]
    pub fn find_by_due_date(&self, due_date: NaiveDate) -> Result<Vec<Task>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_DUE_DATE, ORDER_BY_ID))?;
            let tasks = stmt.query_map([due_date], map_task)?.collect::<Result<Vec<_>, _>>()?;
            Ok(tasks)
        })
    }

    /// Tasks due between `start` and `end`, both inclusive.
    #[instrument(skip(self))]
    pub fn find_by_due_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Task>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_DUE_DATE_BETWEEN, ORDER_BY_ID))?;
            let tasks = stmt
                .query_map(params![start, end], map_task)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(tasks)
        })
    }

    /// Inserts `task` when it has no id, otherwise writes every column of the
    /// row with that id (inserting it if missing). Returns the stored task.
    #[instrument(skip(self, task), fields(id = ?task.id))]
    pub fn save(&self, task: &Task) -> Result<Task, StoreError> {
        self.db.with_conn(|conn| {
            let id = match task.id {
                None => {
                    conn.execute(
                        INSERT_TASK,
                        params![task.name, task.description, task.due_date, task.is_completed],
                    )?;
                    conn.last_insert_rowid()
                }
                Some(id) => {
                    conn.execute(
                        UPSERT_TASK,
                        params![id, task.name, task.description, task.due_date, task.is_completed],
                    )?;
                    id
                }
            };

            Ok(Task {
                id: Some(id),
                ..task.clone()
            })
        })
    }

    /// Deletes the task with `id`. Missing ids are not an error; the number
    /// of removed rows is returned.
    #[instrument(skip(self))]
    pub fn delete_by_id(&self, id: i64) -> Result<usize, StoreError> {
        self.db.with_conn(|conn| Ok(conn.execute(DELETE_TASK, [id])?))
    }
}

/// Maps a row selected with [`SELECT_TASKS`] column order.
fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        is_completed: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> Tasks {
        Tasks::new(Db::in_memory().unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn save_assigns_increasing_ids() {
        let tasks = repo();
        let first = tasks.save(&Task::new("first", None, date(2024, 1, 1))).unwrap();
        let second = tasks.save(&Task::new("second", None, date(2024, 1, 1))).unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[test]
    fn saved_task_round_trips_through_find_by_id() {
        let tasks = repo();
        let saved = tasks
            .save(&Task::new("Dentist", Some("bring card"), date(2024, 3, 15)))
            .unwrap();

        let found = tasks.find_by_id(saved.id.unwrap()).unwrap();

        assert_eq!(found, Some(saved));
    }

    #[test]
    fn find_by_id_missing_is_none() {
        assert_eq!(repo().find_by_id(42).unwrap(), None);
    }

    #[test]
    fn save_with_id_overwrites_row() {
        let tasks = repo();
        let mut saved = tasks.save(&Task::new("draft", Some("v1"), date(2024, 1, 1))).unwrap();
        saved.name = "final".to_string();
        saved.description = None;
        saved.is_completed = true;

        tasks.save(&saved).unwrap();

        let all = tasks.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], saved);
    }

    #[test]
    fn save_with_unknown_id_inserts_under_that_id() {
        let tasks = repo();
        let mut task = Task::new("imported", None, date(2024, 6, 1));
        task.id = Some(500);

        let saved = tasks.save(&task).unwrap();

        assert_eq!(saved.id, Some(500));
        assert_eq!(tasks.find_by_id(500).unwrap(), Some(saved));
    }

    #[test]
    fn find_by_due_date_matches_exact_day_only() {
        let tasks = repo();
        tasks.save(&Task::new("before", None, date(2024, 3, 14))).unwrap();
        let on_day = tasks.save(&Task::new("on day", None, date(2024, 3, 15))).unwrap();
        tasks.save(&Task::new("after", None, date(2024, 3, 16))).unwrap();

        let found = tasks.find_by_due_date(date(2024, 3, 15)).unwrap();

        assert_eq!(found, vec![on_day]);
    }

    #[test]
    fn find_by_due_date_range_is_inclusive() {
        let tasks = repo();
        tasks.save(&Task::new("jan", None, date(2024, 1, 31))).unwrap();
        tasks.save(&Task::new("first", None, date(2024, 2, 1))).unwrap();
        tasks.save(&Task::new("last", None, date(2024, 2, 29))).unwrap();
        tasks.save(&Task::new("mar", None, date(2024, 3, 1))).unwrap();

        let found = tasks.find_by_due_date_range(date(2024, 2, 1), date(2024, 2, 29)).unwrap();
        let names: Vec<&str> = found.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["first", "last"]);
    }

    #[test]
    fn delete_is_idempotent() {
        let tasks = repo();
        let saved = tasks.save(&Task::new("temp", None, date(2024, 1, 1))).unwrap();
        let id = saved.id.unwrap();

        assert_eq!(tasks.delete_by_id(id).unwrap(), 1);
        assert_eq!(tasks.delete_by_id(id).unwrap(), 0);
        assert_eq!(tasks.find_by_id(id).unwrap(), None);
    }
}
