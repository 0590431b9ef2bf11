//! Configuration for the todolist server.
//!
//! Settings come from three layers, each overriding the previous one:
//!
//! 1. Built-in defaults (`127.0.0.1:8081`, database in the data directory,
//!    `info` logging)
//! 2. `config.json` in the data directory (see [`DataStorage`])
//! 3. Environment variables, including those loaded from a `.env` file:
//!    `TODOLIST_HOST`, `TODOLIST_PORT`, `TODOLIST_DB`, `TODOLIST_LOG`
//!
//! Command-line flags on `todolist serve` are applied last by the command itself.
//!
//! ```rust,no_run
//! use todolist::libs::config::Config;
//! use todolist::libs::data_storage::DataStorage;
//!
//! let config = Config::read_in(&DataStorage::new())?.with_env_overrides();
//! println!("listening on {}", config.server.address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info, msg_warning};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_HOST: &str = "TODOLIST_HOST";
pub const ENV_PORT: &str = "TODOLIST_PORT";
pub const ENV_DB: &str = "TODOLIST_DB";
pub const ENV_LOG: &str = "TODOLIST_LOG";

/// HTTP listener settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8081,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DatabaseConfig {
    /// Database file. `None` means `todolist.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Default `tracing` filter, used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file in `storage`.
    pub fn path_in(storage: &DataStorage) -> Result<PathBuf> {
        Ok(storage.get_path(CONFIG_FILE_NAME)?)
    }

    /// Reads the config file from `storage`, or defaults if absent.
    pub fn read_in(storage: &DataStorage) -> Result<Config> {
        Self::read_from(&Self::path_in(storage)?)
    }

    /// Log filter to install before any configuration is loaded: the
    /// `TODOLIST_LOG` value, else `log_level` from the config file in
    /// `storage`, else the default. A missing or unreadable file falls back
    /// silently; loading it for real reports the problem.
    pub fn startup_log_level<F>(storage: &DataStorage, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(ENV_LOG)
            .or_else(|| {
                let path = Self::path_in(storage).ok()?;
                let config_str = fs::read_to_string(path).ok()?;
                serde_json::from_str::<Config>(&config_str).ok().map(|config| config.log_level)
            })
            .unwrap_or_else(|| Config::default().log_level)
    }

    /// Reads `path`, or returns defaults when it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            msg_debug!(Message::ConfigDefaultsUsed);
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| format!("parsing {}", path.display()))?;
        msg_debug!(Message::ConfigLoaded(path.to_owned()));
        Ok(config)
    }

    /// Writes pretty-printed JSON to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the config file at `path`. Returns `false` if there was none.
    pub fn delete_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Applies `TODOLIST_*` variables from the process environment.
    pub fn with_env_overrides(self) -> Config {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up through `lookup`. Unparsable values are
    /// logged and skipped.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            msg_info!(Message::ConfigEnvOverride(ENV_HOST));
            self.server.host = host;
        }
        if let Some(raw) = lookup(ENV_PORT) {
            match raw.parse::<u16>() {
                Ok(port) => {
                    msg_info!(Message::ConfigEnvOverride(ENV_PORT));
                    self.server.port = port;
                }
                Err(_) => {
                    msg_warning!(Message::ConfigInvalidEnvValue(ENV_PORT, raw));
                }
            }
        }
        if let Some(path) = lookup(ENV_DB) {
            msg_info!(Message::ConfigEnvOverride(ENV_DB));
            self.database.path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = level;
        }
        self
    }

    /// The database file to open: the configured path or the default one in
    /// `storage`.
    pub fn database_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        match &self.database.path {
            Some(path) => Ok(path.clone()),
            None => Ok(storage.get_path(DB_FILE_NAME)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.server.address(), "127.0.0.1:8081");
        assert_eq!(config.database.path, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn env_overrides_every_field() {
        let config = Config::default().with_overrides_from(env(&[
            (ENV_HOST, "0.0.0.0"),
            (ENV_PORT, "9000"),
            (ENV_DB, "/tmp/tasks.db"),
            (ENV_LOG, "debug"),
        ]));

        assert_eq!(config.server.address(), "0.0.0.0:9000");
        assert_eq!(config.database.path, Some(PathBuf::from("/tmp/tasks.db")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let config = Config::default().with_overrides_from(env(&[(ENV_PORT, "eighty")]));
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn startup_log_level_prefers_env_then_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = DataStorage::with_base(temp_dir.path());
        assert_eq!(Config::startup_log_level(&storage, env(&[])), "info");

        let config = Config {
            log_level: "warn".to_string(),
            ..Config::default()
        };
        config.save_to(&Config::path_in(&storage).unwrap()).unwrap();
        assert_eq!(Config::startup_log_level(&storage, env(&[])), "warn");
        assert_eq!(Config::startup_log_level(&storage, env(&[(ENV_LOG, "trace")])), "trace");
    }

    #[test]
    fn startup_log_level_ignores_corrupt_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = DataStorage::with_base(temp_dir.path());
        fs::write(Config::path_in(&storage).unwrap(), "{ not json").unwrap();

        assert_eq!(Config::startup_log_level(&storage, env(&[])), "info");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{ "server": { "host": "0.0.0.0", "port": 80 } }"#).unwrap();
        assert_eq!(config.server.port, 80);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.database, DatabaseConfig::default());
    }

    #[test]
    fn database_path_defaults_to_data_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = DataStorage::with_base(temp_dir.path());

        let path = Config::default().database_path(&storage).unwrap();

        assert_eq!(path, temp_dir.path().join(DB_FILE_NAME));
    }
}
