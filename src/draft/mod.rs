pub mod command;

use crate::analysis::recommender::{HeroScore, PickRecommender, ScoringRules};
use crate::catalog::models::Hero;
use crate::catalog::Catalog;
use tracing::{debug, warn};

pub const TEAM_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    TeamFull,
    AlreadySelected,
}

/// Mutations the front end can apply to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEvent {
    Add(Hero),
    Remove(Hero),
    ClearTeam,
    SetQuery(String),
    ClearQuery,
}

/// Selected team plus search query. The candidate list is rebuilt after
/// every event and is always consistent with the current team and query.
pub struct DraftSession<'a> {
    catalog: &'a Catalog,
    recommender: PickRecommender<'a>,
    team: Vec<Hero>,
    query: String,
    candidates: Vec<HeroScore>,
}

impl<'a> DraftSession<'a> {
    pub fn new(catalog: &'a Catalog, rules: ScoringRules) -> Self {
        let mut session = DraftSession {
            catalog,
            recommender: PickRecommender::new(catalog.matchups(), rules),
            team: Vec::new(),
            query: String::new(),
            candidates: Vec::new(),
        };
        session.recompute();
        session
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn team(&self) -> &[Hero] {
        &self.team
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[HeroScore] {
        &self.candidates
    }

    pub fn is_complete(&self) -> bool {
        self.team.len() >= TEAM_SIZE
    }

    pub fn recommender(&self) -> &PickRecommender<'a> {
        &self.recommender
    }

    /// Appends to the team. Full teams and repeated heroes are left as they are.
    pub fn add(&mut self, hero: &Hero) -> AddOutcome {
        let outcome = if self.is_complete() {
            AddOutcome::TeamFull
        } else if self.team.iter().any(|m| m.is_same(hero)) {
            AddOutcome::AlreadySelected
        } else {
            self.team.push(hero.clone());
            AddOutcome::Added
        };

        if outcome != AddOutcome::Added {
            warn!(hero = %hero.localized_name, ?outcome, "add ignored");
        }
        self.recompute();
        outcome
    }

    /// Removes the first member with the same identity. Returns false when the
    /// hero was not on the team.
    pub fn remove(&mut self, hero: &Hero) -> bool {
        let removed = match self.team.iter().position(|m| m.is_same(hero)) {
            Some(idx) => {
                self.team.remove(idx);
                true
            }
            None => {
                warn!(hero = %hero.localized_name, "remove ignored, hero not on team");
                false
            }
        };
        self.recompute();
        removed
    }

    pub fn clear(&mut self) {
        self.team.clear();
        self.recompute();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.recompute();
    }

    /// Returns whether the event changed the team or query.
    pub fn apply(&mut self, event: DraftEvent) -> bool {
        match event {
            DraftEvent::Add(hero) => self.add(&hero) == AddOutcome::Added,
            DraftEvent::Remove(hero) => self.remove(&hero),
            DraftEvent::ClearTeam => {
                let changed = !self.team.is_empty();
                self.clear();
                changed
            }
            DraftEvent::SetQuery(query) => {
                let changed = self.query != query;
                self.set_query(&query);
                changed
            }
            DraftEvent::ClearQuery => {
                let changed = !self.query.is_empty();
                self.clear_query();
                changed
            }
        }
    }

    fn recompute(&mut self) {
        self.candidates = self
            .recommender
            .rank_candidates(self.catalog.heroes(), &self.team, &self.query);
        debug!(
            team = self.team.len(),
            query = %self.query,
            candidates = self.candidates.len(),
            "draft recomputed"
        );
    }
}
