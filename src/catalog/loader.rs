use super::builtin::builtin_catalog;
use super::models::Hero;
use super::Catalog;
use crate::analysis::matchup::{MatchupEntry, MatchupTable};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// On-disk catalog layout.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub heroes: Vec<Hero>,
    #[serde(default)]
    pub matchups: Vec<MatchupEntry>,
}

impl CatalogFile {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn into_catalog(self) -> Result<Catalog, AppError> {
        Catalog::new(self.heroes, MatchupTable::from_entries(self.matchups))
    }
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::CatalogError(format!("cannot read {}: {}", path.display(), e))
    })?;

    let catalog = CatalogFile::parse(&content)
        .and_then(CatalogFile::into_catalog)
        .map_err(|e| match e {
            AppError::CatalogError(msg) => {
                AppError::CatalogError(format!("{}: {}", path.display(), msg))
            }
            other => AppError::CatalogError(format!("{}: {}", path.display(), other)),
        })?;

    info!(
        path = %path.display(),
        heroes = catalog.len(),
        matchups = catalog.matchups().len(),
        "loaded catalog file"
    );
    if catalog.matchups().is_empty() {
        warn!(path = %path.display(), "catalog has no matchups, every score will be 0");
    }
    Ok(catalog)
}

/// File catalog when a path is configured, embedded catalog otherwise.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppError> {
    match path {
        Some(path) => load_catalog_file(path),
        None => {
            let catalog = builtin_catalog()?;
            info!(heroes = catalog.len(), "using embedded catalog");
            Ok(catalog)
        }
    }
}
