use anyhow::Result;
use clap::Parser;
use todolist::commands::Cli;
use todolist::libs::config::Config;
use todolist::libs::data_storage::DataStorage;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env values become TODOLIST_* overrides
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    let storage = DataStorage::new();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::startup_log_level(&storage, |name| std::env::var(name).ok())));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cli.menu(&storage).await
}
