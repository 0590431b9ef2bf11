pub mod init;
pub mod migrations;
pub mod serve;

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve(serve::ServeArgs),
    #[command(about = "Write the configuration file")]
    Init(init::InitArgs),
    #[command(about = "Inspect database migrations", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Runs the parsed subcommand against the data directory in `storage`.
    ///
    /// `serve` and `migrations` load `config.json` with environment overrides
    /// applied. `init` works on the file directly, so it can still replace or
    /// delete one that no longer parses.
    pub async fn menu(self, storage: &DataStorage) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::cmd(args, load_config(storage)?, storage).await,
            Commands::Init(args) => init::cmd(args, storage),
            Commands::Migrations(args) => migrations::cmd(args, &load_config(storage)?, storage),
        }
    }
}

fn load_config(storage: &DataStorage) -> Result<Config> {
    Ok(Config::read_in(storage)?.with_env_overrides())
}
