use crate::db::error::StoreError;
use crate::libs::messages::Message;

/// Errors returned by [`TaskService`](super::service::TaskService).
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("{}", Message::TaskNotFound(*.0))]
    NotFound(i64),

    #[error("{}", Message::InvalidDate(.0.clone()))]
    InvalidDate(String),

    #[error("{}", Message::InvalidMonth(*.year, *.month))]
    InvalidMonth { year: i32, month: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TaskError {
    /// True for errors caused by the caller's input rather than by storage.
    pub fn is_bad_input(&self) -> bool {
        matches!(self, TaskError::InvalidDate(_) | TaskError::InvalidMonth { .. })
    }
}
