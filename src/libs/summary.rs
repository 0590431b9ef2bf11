//! Day and month counts of uncompleted tasks.
//!
//! A day's value is the number of its tasks that are not completed, or
//! [`NO_TASKS`] when nothing is due that day at all. `0` therefore means
//! "everything due that day is done", which is different from "nothing due".

use super::error::TaskError;
use super::task::Task;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Day value for a date with no tasks.
pub const NO_TASKS: i32 = -1;

/// Uncompleted-count for one day's tasks.
pub fn uncompleted_count(tasks: &[Task]) -> i32 {
    if tasks.is_empty() {
        return NO_TASKS;
    }
    tasks.iter().filter(|task| !task.is_completed).count() as i32
}

/// Parses an ISO-8601 `YYYY-MM-DD` date.
///
/// chrono's `%Y-%m-%d` also takes unpadded fields, a leading sign and
/// leading whitespace, so the exact shape is checked first.
pub fn parse_date(raw: &str) -> Result<NaiveDate, TaskError> {
    let invalid = || TaskError::InvalidDate(raw.to_string());
    if !is_iso_date_shape(raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}

fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// First and last day of `year`/`month`.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), TaskError> {
    let invalid = || TaskError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next_month.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;
    Ok((first, last))
}

/// Per-day uncompleted counts for every day of `year`/`month`.
///
/// `tasks` may hold tasks from any dates; only those inside the month are
/// counted. Every day of the month gets an entry, keyed by day-of-month.
pub fn month_counts(year: i32, month: u32, tasks: &[Task]) -> Result<BTreeMap<u32, i32>, TaskError> {
    let (first, last) = month_bounds(year, month)?;

    let mut by_day: BTreeMap<u32, Vec<Task>> = first.iter_days().take_while(|d| *d <= last).map(|d| (d.day(), Vec::new())).collect();
    for task in tasks.iter().filter(|t| t.due_date >= first && t.due_date <= last) {
        if let Some(day) = by_day.get_mut(&task.due_date.day()) {
            day.push(task.clone());
        }
    }

    Ok(by_day.into_iter().map(|(day, tasks)| (day, uncompleted_count(&tasks))).collect())
}
