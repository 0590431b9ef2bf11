use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskCompletionChanged(i64, bool),
    TaskDeleted(i64), // also the DELETE /tasks/{id} response body
    TaskNotFound(i64),
    TasksFoundForDate(usize, String),

    // === INPUT MESSAGES ===
    InvalidDate(String),
    InvalidMonth(i32, u32), // year, month

    // === SERVER MESSAGES ===
    ServerStarting(String),
    ServerListening(SocketAddr),
    ServerShuttingDown,
    ShutdownSignalFailed(String),
    ServerStopped,
    RequestFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(PathBuf),
    ConfigDeleted(PathBuf),
    ConfigNotFound(PathBuf),
    ConfigLoaded(PathBuf),
    ConfigDefaultsUsed,
    ConfigEnvOverride(&'static str),
    ConfigInvalidEnvValue(&'static str, String),

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseNotFound(PathBuf),
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String), // version, name, applied_at
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
}
