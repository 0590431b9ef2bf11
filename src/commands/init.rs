//! `todolist init`: writes (or removes) the configuration file.

use crate::libs::{config::Config, data_storage::DataStorage, messages::Message};
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of writing one
    #[arg(long)]
    delete: bool,

    /// Address the server binds to
    #[arg(long)]
    host: Option<String>,

    /// Port the server listens on
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,
}

pub fn cmd(args: InitArgs, storage: &DataStorage) -> Result<()> {
    run(args, &Config::path_in(storage)?)
}

/// Writes or deletes the config at `path`. Existing settings not named by a
/// flag are kept.
pub fn run(args: InitArgs, path: &Path) -> Result<()> {
    if args.delete {
        if Config::delete_at(path)? {
            msg_print!(Message::ConfigDeleted(path.to_owned()));
        } else {
            msg_print!(Message::ConfigNotFound(path.to_owned()));
        }
        return Ok(());
    }

    let mut config = Config::read_from(path)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(database) = args.database {
        config.database.path = Some(database);
    }
    config.save_to(path)?;

    msg_print!(Message::ConfigSaved(path.to_owned()));
    Ok(())
}
