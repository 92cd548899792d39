use crate::errors::{AppError, AppResult};
use crate::storage::LocalStore;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Environment override for the configuration directory.
pub const HOME_ENV: &str = "RHABITLOG_HOME";

pub const CONFIG_FILE_NAME: &str = "rhabitlog.conf";
pub const SQLITE_FILE_NAME: &str = "rhabitlog.sqlite";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON document in the data directory
    #[default]
    Local,
    /// SQLite database, rows scoped to `user_id`
    Sqlite,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Local => "local",
            Backend::Sqlite => "sqlite",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_data_path")]
    pub data_path: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_data_path() -> String {
    Config::config_dir().to_string_lossy().to_string()
}
fn default_user_id() -> String {
    "local".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_recent_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            data_path: default_data_path(),
            user_id: default_user_id(),
            log_level: default_log_level(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// Standard configuration directory, `~/.rhabitlog` unless overridden
    /// through `RHABITLOG_HOME`.
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rhabitlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rhabitlog")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Directory holding the data file(s). Relative paths are resolved
    /// against the configuration directory.
    pub fn data_dir(&self) -> PathBuf {
        let p = Path::new(&self.data_path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    pub fn sqlite_file(&self) -> PathBuf {
        self.data_dir().join(SQLITE_FILE_NAME)
    }

    /// File holding the data of the active backend.
    pub fn data_file(&self) -> PathBuf {
        match self.backend {
            Backend::Local => LocalStore::file_in(&self.data_dir()),
            Backend::Sqlite => self.sqlite_file(),
        }
    }

    /// Load configuration from file, or defaults if it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    /// Write the configuration file and create the data directory.
    /// In test mode the configuration file is left untouched.
    pub fn init_all(
        data_path: Option<String>,
        backend: Option<Backend>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut cfg = Self::load()?;
        if let Some(p) = data_path {
            cfg.data_path = p;
        }
        if let Some(b) = backend {
            cfg.backend = b;
        }

        if !is_test {
            fs::write(Self::config_file(), serde_yaml::to_string(&cfg)?)?;
        }

        fs::create_dir_all(cfg.data_dir())?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("backend: sqlite\nuser_id: alice\n").unwrap();
        assert_eq!(cfg.backend, Backend::Sqlite);
        assert_eq!(cfg.user_id, "alice");
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.recent_limit, 10);
    }

    #[test]
    fn absolute_data_path_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = Config {
            data_path: tmp.path().to_string_lossy().to_string(),
            ..Config::default()
        };
        assert_eq!(cfg.data_dir(), tmp.path());
        assert_eq!(cfg.sqlite_file(), tmp.path().join(SQLITE_FILE_NAME));
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "backend: [oops").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }
}
