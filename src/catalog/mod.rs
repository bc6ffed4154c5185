pub mod builtin;
pub mod loader;
pub mod models;

use crate::analysis::matchup::MatchupTable;
use crate::error::AppError;
use models::{Hero, HERO_NAME_PREFIX};
use std::collections::HashSet;

/// Immutable hero list plus the matchup table, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    heroes: Vec<Hero>,
    matchups: MatchupTable,
}

impl Catalog {
    /// Validates uniqueness and matchup references, then sorts heroes by
    /// display name. Display names must differ ignoring case, since `find`
    /// does.
    pub fn new(mut heroes: Vec<Hero>, matchups: MatchupTable) -> Result<Self, AppError> {
        let mut names = HashSet::new();
        let mut display_names = HashSet::new();
        let mut folded_names = HashSet::new();

        for hero in &heroes {
            if !names.insert(hero.name.as_str()) {
                return Err(AppError::CatalogError(format!(
                    "duplicate hero name '{}'",
                    hero.name
                )));
            }
            display_names.insert(hero.localized_name.as_str());
            if !folded_names.insert(hero.localized_name.to_lowercase()) {
                return Err(AppError::CatalogError(format!(
                    "duplicate hero display name '{}'",
                    hero.localized_name
                )));
            }
        }

        if let Some(unknown) = matchups
            .hero_names()
            .find(|name| !display_names.contains(name))
        {
            return Err(AppError::CatalogError(format!(
                "matchup references unknown hero '{}'",
                unknown
            )));
        }

        heroes.sort_by(|a, b| a.localized_name.cmp(&b.localized_name));

        Ok(Catalog { heroes, matchups })
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn matchups(&self) -> &MatchupTable {
        &self.matchups
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// Case-insensitive lookup by display name or internal name, with or
    /// without the `npc_dota_hero_` prefix.
    pub fn find(&self, query: &str) -> Result<&Hero, AppError> {
        let wanted = query.trim().to_lowercase();
        if wanted.is_empty() {
            return Err(AppError::HeroNotFound(query.to_string()));
        }

        let short = wanted
            .strip_prefix(HERO_NAME_PREFIX)
            .unwrap_or(wanted.as_str());

        self.heroes
            .iter()
            .find(|h| {
                h.localized_name.to_lowercase() == wanted
                    || h.short_name().to_lowercase() == short
            })
            .ok_or_else(|| AppError::HeroNotFound(query.trim().to_string()))
    }

    /// Resolves a list of hero names, keeping their order.
    pub fn find_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Hero>, AppError> {
        names
            .iter()
            .map(|n| self.find(n.as_ref()).cloned())
            .collect()
    }
}
