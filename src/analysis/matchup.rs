use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One recorded direction of a matchup: how good `hero` is when facing `against`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub hero: String,
    pub against: String,
    pub score: f64,
}

/// Sparse table of hero-vs-hero scores keyed by display name.
#[derive(Debug, Clone, Default)]
pub struct MatchupTable {
    scores: HashMap<(String, String), f64>,
}

impl MatchupTable {
    pub fn new() -> Self {
        MatchupTable {
            scores: HashMap::new(),
        }
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = MatchupEntry>,
    {
        let mut table = MatchupTable::new();
        for entry in entries {
            table.insert(&entry.hero, &entry.against, entry.score);
        }
        table
    }

    /// Later inserts of the same ordered pair overwrite earlier ones.
    pub fn insert(&mut self, hero: &str, against: &str, score: f64) {
        self.scores
            .insert((hero.to_string(), against.to_string()), score);
    }

    /// Recorded value for the ordered pair, without reverse derivation.
    pub fn direct(&self, hero: &str, against: &str) -> Option<f64> {
        self.scores
            .get(&(hero.to_string(), against.to_string()))
            .copied()
    }

    /// Direct value if recorded, else the negated reverse, else neutral.
    pub fn score(&self, selected: &str, candidate: &str) -> f64 {
        if let Some(direct) = self.direct(selected, candidate) {
            return direct;
        }

        match self.direct(candidate, selected) {
            Some(reverse) => -reverse,
            None => 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Every hero name mentioned on either side of a recorded pair.
    pub fn hero_names(&self) -> impl Iterator<Item = &str> {
        self.scores
            .keys()
            .flat_map(|(a, b)| [a.as_str(), b.as_str()])
    }
}
