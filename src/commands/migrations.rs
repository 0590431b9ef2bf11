//! `todolist migrations`: inspects the schema version of the database.

use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use rusqlite::Connection;
use std::path::Path;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

pub fn cmd(args: MigrationsArgs, config: &Config, storage: &DataStorage) -> Result<()> {
    for line in inspect(&args.command, &config.database_path(storage)?)? {
        msg_print!(line);
    }
    Ok(())
}

/// Reports on the database file at `path`. A missing file is reported as
/// such and left uncreated.
fn inspect(command: &MigrationsCommand, path: &Path) -> Result<Vec<Message>> {
    if !path.exists() {
        return Ok(vec![Message::DatabaseNotFound(path.to_owned())]);
    }
    let conn = Db::open_read_only(path)?;
    report(command, &conn)
}

fn report(command: &MigrationsCommand, conn: &Connection) -> Result<Vec<Message>> {
    let mut lines = Vec::new();
    match command {
        MigrationsCommand::Status => {
            lines.push(Message::DatabaseVersion(get_db_version(conn)?));
            lines.push(if needs_migration(conn)? {
                Message::DatabaseNeedsUpdate
            } else {
                Message::DatabaseUpToDate
            });
        }
        MigrationsCommand::History => {
            lines.push(Message::MigrationHistory);
            for (version, name, applied_at) in MigrationManager::new().get_migration_history(conn)? {
                lines.push(Message::MigrationHistoryEntry(version, name, applied_at));
            }
        }
    }
    Ok(lines)
}
