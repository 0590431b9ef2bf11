//! `todolist serve`: runs the HTTP server until Ctrl+C.

use crate::api::{self, AppState};
use crate::db::{db::Db, tasks::Tasks};
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::{Context, Result};
use axum::Router;
use clap::Args;
use std::future::Future;
use std::path::PathBuf;
use tokio::net::TcpListener;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config and TODOLIST_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config and TODOLIST_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database file (overrides config and TODOLIST_DB)
    #[arg(short, long)]
    pub database: Option<PathBuf>,
}

impl ServeArgs {
    /// Applies the flags on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(database) = &self.database {
            config.database.path = Some(database.clone());
        }
        config
    }
}

pub async fn cmd(args: ServeArgs, config: Config, storage: &DataStorage) -> Result<()> {
    let config = args.apply(config);
    msg_info!(Message::ServerStarting(env!("CARGO_PKG_VERSION").to_string()));

    let db_path = config.database_path(storage)?;
    let db = Db::open(&db_path).with_context(|| format!("opening database {}", db_path.display()))?;
    let app = api::router(AppState::new(TaskService::new(Tasks::new(db))));

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;

    serve(listener, app, shutdown_signal()).await
}

/// Serves `app` on `listener` until `shutdown` completes.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    msg_success!(Message::ServerListening(listener.local_addr()?));

    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        msg_warning!(Message::ShutdownSignalFailed(e.to_string()));
        std::future::pending::<()>().await;
    }
    msg_info!(Message::ServerShuttingDown);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            host: Some("0.0.0.0".to_string()),
            port: None,
            database: Some(PathBuf::from("tasks.db")),
        };

        let config = args.apply(Config::default());

        assert_eq!(config.server.address(), "0.0.0.0:8081");
        assert_eq!(config.database.path, Some(PathBuf::from("tasks.db")));
    }
}
