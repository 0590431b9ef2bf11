//! Task operations behind the HTTP routes.
//!
//! [`TaskService`] turns repository results into domain results. An absent
//! row becomes [`TaskError::NotFound`] and storage failures pass through as
//! [`TaskError::Store`]. Every change is logged through the `msg_*` macros.
//!
//! ## Counting rules
//!
//! Day counts follow [`summary`]: `-1` when nothing is due, otherwise the
//! number of tasks not yet completed. The month view runs one range query
//! for the whole month and groups it in memory.

use super::error::TaskError;
use super::messages::Message;
use super::summary;
use super::task::Task;
use crate::db::tasks::Tasks;
use crate::{msg_debug, msg_info};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Task operations behind the HTTP routes.
#[derive(Clone)]
pub struct TaskService {
    tasks: Tasks,
}

impl TaskService {
    pub fn new(tasks: Tasks) -> Self {
        TaskService { tasks }
    }

    /// Every stored task, ordered by id.
    pub fn get_all_tasks(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.find_all()?)
    }

    /// The task with `id`, or [`TaskError::NotFound`].
    pub fn get_task_by_id(&self, id: i64) -> Result<Task, TaskError> {
        self.tasks.find_by_id(id)?.ok_or(TaskError::NotFound(id))
    }

    /// Stores `task` as a new row. Any id in the input is discarded.
    pub fn save_task(&self, mut task: Task) -> Result<Task, TaskError> {
        task.id = None;
        let saved = self.tasks.save(&task)?;
        if let Some(id) = saved.id {
            msg_info!(Message::TaskCreated(id));
        }
        Ok(saved)
    }

    /// Replaces name, description, due date and completion flag of task `id`.
    pub fn update_task(&self, id: i64, updated: Task) -> Result<Task, TaskError> {
        let mut existing = self.get_task_by_id(id)?;
        existing.overwrite_with(updated);
        let saved = self.tasks.save(&existing)?;
        msg_info!(Message::TaskUpdated(id));
        Ok(saved)
    }

    /// Sets only the completion flag of task `id`.
    pub fn update_task_completion(&self, id: i64, is_completed: bool) -> Result<Task, TaskError> {
        let mut existing = self.get_task_by_id(id)?;
        existing.is_completed = is_completed;
        let saved = self.tasks.save(&existing)?;
        msg_info!(Message::TaskCompletionChanged(id, is_completed));
        Ok(saved)
    }

    /// Completion flag of task `id`.
    pub fn is_task_completed(&self, id: i64) -> Result<bool, TaskError> {
        Ok(self.get_task_by_id(id)?.is_completed)
    }

    /// Deletes task `id`; deleting a missing task succeeds.
    pub fn delete_task(&self, id: i64) -> Result<(), TaskError> {
        let removed = self.tasks.delete_by_id(id)?;
        if removed > 0 {
            msg_info!(Message::TaskDeleted(id));
        }
        Ok(())
    }

    /// Tasks due exactly on `due_date`, ordered by id.
    pub fn get_tasks_by_due_date(&self, due_date: NaiveDate) -> Result<Vec<Task>, TaskError> {
        let tasks = self.tasks.find_by_due_date(due_date)?;
        msg_debug!(Message::TasksFoundForDate(tasks.len(), due_date.to_string()));
        Ok(tasks)
    }

    /// Uncompleted tasks due on `due_date`, or `-1` when nothing is due.
    pub fn uncompleted_count_by_date(&self, due_date: NaiveDate) -> Result<i32, TaskError> {
        let tasks = self.get_tasks_by_due_date(due_date)?;
        Ok(summary::uncompleted_count(&tasks))
    }

    /// Day-of-month to uncompleted count for every day of `year`/`month`.
    pub fn uncompleted_count_by_month(&self, year: i32, month: u32) -> Result<BTreeMap<u32, i32>, TaskError> {
        let (first, last) = summary::month_bounds(year, month)?;
        let tasks = self.tasks.find_by_due_date_range(first, last)?;
        summary::month_counts(year, month, &tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::db::Db;
    use crate::libs::summary::NO_TASKS;

    fn service() -> TaskService {
        TaskService::new(Tasks::new(Db::in_memory().unwrap()))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn create_then_get_returns_equal_task() {
        let service = service();
        let created = service
            .save_task(Task::new("Pay rent", Some("by transfer"), date(2024, 3, 1)))
            .unwrap();

        let fetched = service.get_task_by_id(created.id.unwrap()).unwrap();

        assert_eq!(fetched, created);
    }

    #[test]
    fn save_ignores_client_supplied_id() {
        let service = service();
        let existing = service.save_task(Task::new("keep me", None, date(2024, 3, 1))).unwrap();
        let mut sneaky = Task::new("overwrite?", None, date(2024, 3, 1));
        sneaky.id = existing.id;

        let created = service.save_task(sneaky).unwrap();

        assert_ne!(created.id, existing.id);
        assert_eq!(service.get_task_by_id(existing.id.unwrap()).unwrap().name, "keep me");
    }

    #[test]
    fn get_missing_task_is_not_found() {
        assert!(matches!(service().get_task_by_id(9), Err(TaskError::NotFound(9))));
    }

    #[test]
    fn completion_patch_leaves_other_fields() {
        let service = service();
        let created = service
            .save_task(Task::new("Water plants", Some("balcony"), date(2024, 3, 2)))
            .unwrap();
        let id = created.id.unwrap();

        let patched = service.update_task_completion(id, true).unwrap();

        assert!(patched.is_completed);
        assert_eq!(patched.name, created.name);
        assert_eq!(patched.description, created.description);
        assert_eq!(patched.due_date, created.due_date);
        assert!(service.is_task_completed(id).unwrap());
    }

    #[test]
    fn full_update_overwrites_fields_but_not_id() {
        let service = service();
        let created = service.save_task(Task::new("Old", Some("old"), date(2024, 3, 2))).unwrap();
        let id = created.id.unwrap();
        let mut replacement = Task::new("New", None, date(2024, 4, 4));
        replacement.id = Some(id + 100);
        replacement.is_completed = true;

        let updated = service.update_task(id, replacement).unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "New");
        assert_eq!(updated.description, None);
        assert_eq!(updated.due_date, date(2024, 4, 4));
        assert!(updated.is_completed);
        assert_eq!(service.get_all_tasks().unwrap().len(), 1);
    }

    #[test]
    fn updates_of_missing_task_are_not_found() {
        let service = service();
        let body = Task::new("x", None, date(2024, 1, 1));
        assert!(matches!(service.update_task(3, body), Err(TaskError::NotFound(3))));
        assert!(matches!(service.update_task_completion(3, true), Err(TaskError::NotFound(3))));
        assert!(matches!(service.is_task_completed(3), Err(TaskError::NotFound(3))));
    }

    #[test]
    fn deleted_task_is_not_found() {
        let service = service();
        let id = service.save_task(Task::new("gone", None, date(2024, 1, 1))).unwrap().id.unwrap();

        service.delete_task(id).unwrap();
        service.delete_task(id).unwrap();

        assert!(matches!(service.get_task_by_id(id), Err(TaskError::NotFound(_))));
    }

    #[test]
    fn uncompleted_count_by_date_distinguishes_empty_from_done() {
        let service = service();
        let day = date(2024, 3, 15);
        assert_eq!(service.uncompleted_count_by_date(day).unwrap(), NO_TASKS);

        let id = service.save_task(Task::new("only", None, day)).unwrap().id.unwrap();
        assert_eq!(service.uncompleted_count_by_date(day).unwrap(), 1);

        service.update_task_completion(id, true).unwrap();
        assert_eq!(service.uncompleted_count_by_date(day).unwrap(), 0);
    }

    #[test]
    fn month_counts_cover_every_day() {
        let service = service();
        service.save_task(Task::new("a", None, date(2024, 2, 10))).unwrap();
        service.save_task(Task::new("b", None, date(2024, 2, 10))).unwrap();
        service.save_task(Task::new("leap", None, date(2024, 2, 29))).unwrap();
        service.save_task(Task::new("march", None, date(2024, 3, 1))).unwrap();

        let counts = service.uncompleted_count_by_month(2024, 2).unwrap();

        assert_eq!(counts.len(), 29);
        assert_eq!(counts[&10], 2);
        assert_eq!(counts[&29], 1);
        assert_eq!(counts[&1], NO_TASKS);
    }

    #[test]
    fn month_counts_reject_invalid_month() {
        assert!(matches!(
            service().uncompleted_count_by_month(2024, 13),
            Err(TaskError::InvalidMonth { year: 2024, month: 13 })
        ));
    }
}
