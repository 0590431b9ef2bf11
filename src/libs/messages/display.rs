//! Display implementation for todolist messages.
//!
//! All user-facing and log text lives here, so handlers, commands and the
//! storage layer only pick a `Message` variant and never format text inline.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskCompletionChanged(id, completed) => {
                format!("Task {} marked as {}", id, if *completed { "completed" } else { "not completed" })
            }
            Message::TaskDeleted(id) => format!("Task with ID {} has been deleted.", id),
            Message::TaskNotFound(id) => format!("Task not found with ID: {}", id),
            Message::TasksFoundForDate(count, date) => format!("Found {} tasks due on {}", count, date),

            // === INPUT MESSAGES ===
            Message::InvalidDate(raw) => format!("Invalid date '{}', expected YYYY-MM-DD", raw),
            Message::InvalidMonth(year, month) => format!("Invalid month {}-{:02}", year, month),

            // === SERVER MESSAGES ===
            Message::ServerStarting(version) => format!("Starting todolist {}", version),
            Message::ServerListening(addr) => format!("Listening on http://{}", addr),
            Message::ServerShuttingDown => "Shutdown signal received, finishing in-flight requests".to_string(),
            Message::ShutdownSignalFailed(error) => format!("Could not listen for shutdown signal: {}", error),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::RequestFailed(error) => format!("Request failed: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path.display()),
            Message::ConfigDeleted(path) => format!("Configuration {} removed", path.display()),
            Message::ConfigNotFound(path) => format!("No configuration file at {}", path.display()),
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path.display()),
            Message::ConfigDefaultsUsed => "No configuration file found, using defaults".to_string(),
            Message::ConfigEnvOverride(name) => format!("Configuration overridden by {}", name),
            Message::ConfigInvalidEnvValue(name, value) => format!("Ignoring {}={}: not a valid value", name, value),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),
            Message::DatabaseNotFound(path) => format!("No database at {}", path.display()),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => {
                format!("  v{}: {} (applied: {})", version, name, applied_at)
            }
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
        };

        write!(f, "{}", text)
    }
}
