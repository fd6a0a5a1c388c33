use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::{Result, eyre::Context, eyre::eyre};
use serde::{Deserialize, Serialize};

use crate::report::query::SingerQuerySelector;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Mysql,
}

/// Connection descriptor for the report store.
///
/// Either a full `url`, or a `backend` plus host/credential/schema. For
/// sqlite the `schema` is the database file path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub backend: Backend,
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub schema: Option<String>,
    pub max_connections: u32,
    pub statement_timeout_secs: u64,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            backend: Backend::Sqlite,
            host: None,
            username: None,
            password: None,
            schema: None,
            max_connections: 10,
            statement_timeout_secs: 5,
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Singer ids strictly above this use the primary lookup.
    pub singer_id_cutoff: i64,
    /// Target of the song links on the genre page.
    pub song_detail_path: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            singer_id_cutoff: SingerQuerySelector::DEFAULT_CUTOFF,
            song_detail_path: "/song".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

impl DatabaseConfig {
    pub fn statement_timeout(&self) -> Duration {
        Duration::from_secs(self.statement_timeout_secs.max(1))
    }

    /// Path of the sqlite database file, if this is a sqlite descriptor.
    pub fn sqlite_path(&self) -> Option<PathBuf> {
        if self.url.is_some() || self.backend != Backend::Sqlite {
            return None;
        }
        Some(match &self.schema {
            Some(schema) => expand_path(schema),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("award-reports")
                .join("reports.db"),
        })
    }

    /// Builds the connection URL from the descriptor.
    pub fn connection_url(&self) -> Result<String> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        match self.backend {
            Backend::Sqlite => {
                let path = self
                    .sqlite_path()
                    .ok_or_else(|| eyre!("No sqlite database path configured"))?;
                Ok(format!("sqlite://{}?mode=rwc", path.display()))
            }
            Backend::Mysql => {
                let host = self
                    .host
                    .as_deref()
                    .ok_or_else(|| eyre!("database.host is required for mysql"))?;
                let username = self
                    .username
                    .as_deref()
                    .ok_or_else(|| eyre!("database.username is required for mysql"))?;
                let schema = self
                    .schema
                    .as_deref()
                    .ok_or_else(|| eyre!("database.schema is required for mysql"))?;
                let credentials = match &self.password {
                    Some(password) => format!(
                        "{}:{}",
                        urlencoding::encode(username),
                        urlencoding::encode(password)
                    ),
                    None => urlencoding::encode(username).into_owned(),
                };
                Ok(format!("mysql://{credentials}@{host}/{schema}"))
            }
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("award-reports").join("config.toml"))
    }

    /// Load config from the default path, or built-in defaults if there is none
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write the default config to the default path, if it doesn't exist
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path().ok_or_else(|| eyre!("No config directory found"))?;
        if path.exists() {
            log::info!("Config already exists at: {}", path.display());
            return Ok(path);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents =
            toml::to_string_pretty(&Self::default()).wrap_err("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }
}
