use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = ".rtimecard";
const CONFIG_FILE: &str = "rtimecard.conf";
const DB_FILE: &str = "rtimecard.sqlite";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Signed-in user id. Overridden by `--user`.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Lifetime of cached backend reads; 0 disables the cache.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_page_size() -> usize {
    10
}
fn default_cache_ttl() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            user: None,
            page_size: default_page_size(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl Config {
    /// `~/.rtimecard`, or `./.rtimecard` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Load the configuration file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory and file (unless `is_test`) for the
    /// given database path and user.
    pub fn init_all(
        custom_db: Option<String>,
        user: Option<String>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();

        // DB name: user provided (relative to the config dir) or default
        let database = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join(DB_FILE),
        };

        let config = Config {
            database: database.to_string_lossy().to_string(),
            user,
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
