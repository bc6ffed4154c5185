use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog to load instead of the embedded one.
    pub catalog_path: Option<PathBuf>,
    pub bonuses: bool,
    pub top_n: usize,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: None,
            bonuses: false,
            top_n: DEFAULT_TOP_N,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let catalog_path = env::var("DOTA_PICK_CATALOG")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .or_else(default_catalog_path);

        let bonuses = match env::var("DOTA_PICK_BONUSES") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                AppError::ConfigError(format!(
                    "DOTA_PICK_BONUSES must be true/false or 1/0, got '{}'",
                    value
                ))
            })?,
            Err(_) => false,
        };

        let top_n = match env::var("DOTA_PICK_TOP_N") {
            Ok(value) => value.trim().parse::<usize>().map_err(|_| {
                AppError::ConfigError(format!(
                    "DOTA_PICK_TOP_N must be a positive number, got '{}'",
                    value
                ))
            })?,
            Err(_) => DEFAULT_TOP_N,
        };

        let log_filter =
            env::var("DOTA_PICK_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            catalog_path,
            bonuses,
            top_n,
            log_filter,
        })
    }
}

/// `~/.dota_pick/catalog.json`, only when the file is actually there.
fn default_catalog_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".dota_pick").join("catalog.json");
    path.is_file().then_some(path)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
