use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A to-do item with a due date.
///
/// `id` is `None` until the task has been saved; storage assigns it on insert
/// and it never changes afterwards. Over JSON the fields use camelCase names
/// (`dueDate`, `isCompleted`); `completed` is accepted as an alias on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    #[serde(default, alias = "completed")]
    pub is_completed: bool,
}

impl Task {
    pub fn new(name: &str, description: Option<&str>, due_date: NaiveDate) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            description: description.map(str::to_string),
            due_date,
            is_completed: false,
        }
    }

    /// Copies every mutable field from `other`, keeping this task's id.
    pub fn overwrite_with(&mut self, other: Task) {
        self.name = other.name;
        self.description = other.description;
        self.due_date = other.due_date;
        self.is_completed = other.is_completed;
    }
}

/// Body of `PATCH /tasks/{id}`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionUpdate {
    #[serde(alias = "completed")]
    pub is_completed: bool,
}
