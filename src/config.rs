use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::MealplanError;

pub const DATA_DIR_NAME: &str = ".mealplan";
pub const LOG_ENV: &str = "MEALPLAN_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_filter: String,
}

/// Optional `<data dir>/config.json`.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    log: Option<String>,
}

impl Config {
    /// Resolve the data directory and log filter.
    ///
    /// Data directory: explicit flag, else the nearest ancestor holding
    /// `.mealplan/`, else `.mealplan/` under the working directory.
    /// Log filter: `MEALPLAN_LOG`, else the config file, else `warn`.
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self, MealplanError> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => {
                let cwd = env::current_dir().map_err(|e| MealplanError::persistence(e.to_string()))?;
                find_data_dir(&cwd).unwrap_or_else(|| cwd.join(DATA_DIR_NAME))
            }
        };

        let file_config = read_file_config(&data_dir.join("config.json"));
        let log_filter = env::var(LOG_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or(file_config.log)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            data_dir,
            log_filter,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("mealplan.db")
    }
}

/// Walk up from `start` looking for a `.mealplan` directory.
fn find_data_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

fn read_file_config(path: &Path) -> FileConfig {
    let Ok(content) = fs::read_to_string(path) else {
        return FileConfig::default();
    };
    // Logging is not up yet, so a broken file is reported on stderr directly.
    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring malformed {}: {e}", path.display());
        FileConfig::default()
    })
}
