use super::filter::available_heroes;
use super::matchup::MatchupTable;
use crate::catalog::models::Hero;
use std::cmp::Ordering;
use tracing::debug;

pub const SCORE_MIN: f64 = -10.0;
pub const SCORE_MAX: f64 = 10.0;

pub const POSITION_DIVERSITY_BONUS: f64 = 1.0;
pub const ATTRIBUTE_DIVERSITY_BONUS: f64 = 0.5;

/// Extra composition rules applied on top of matchup scores.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringRules {
    /// Added per team member playing a different position than the candidate.
    pub position_bonus: f64,
    /// Added per team member with a different primary attribute.
    pub attribute_bonus: f64,
}

impl ScoringRules {
    pub fn matchups_only() -> Self {
        ScoringRules::default()
    }

    pub fn with_diversity_bonuses() -> Self {
        ScoringRules {
            position_bonus: POSITION_DIVERSITY_BONUS,
            attribute_bonus: ATTRIBUTE_DIVERSITY_BONUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroScore {
    pub hero: Hero,
    pub score: f64,
}

impl HeroScore {
    pub fn new(hero: Hero, score: f64) -> Self {
        HeroScore { hero, score }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreComponent {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    /// Sum of all components before clamping.
    pub raw_total: f64,
    pub score: f64,
}

pub struct PickRecommender<'a> {
    matchups: &'a MatchupTable,
    rules: ScoringRules,
}

impl<'a> PickRecommender<'a> {
    pub fn new(matchups: &'a MatchupTable, rules: ScoringRules) -> Self {
        PickRecommender { matchups, rules }
    }

    fn bonus(&self, member: &Hero, candidate: &Hero) -> f64 {
        let mut bonus = 0.0;
        if member.position != candidate.position {
            bonus += self.rules.position_bonus;
        }
        if member.primary_attr != candidate.primary_attr {
            bonus += self.rules.attribute_bonus;
        }
        bonus
    }

    /// Sum of matchup scores of every team member against the candidate,
    /// clamped to [-10, 10]. An empty team scores 0.
    pub fn team_score(&self, team: &[Hero], candidate: &Hero) -> f64 {
        if team.is_empty() {
            return 0.0;
        }

        let total: f64 = team
            .iter()
            .map(|member| {
                self.matchups
                    .score(&member.localized_name, &candidate.localized_name)
                    + self.bonus(member, candidate)
            })
            .sum();

        total.clamp(SCORE_MIN, SCORE_MAX)
    }

    pub fn breakdown(&self, team: &[Hero], candidate: &Hero) -> ScoreBreakdown {
        let mut components = Vec::new();

        for member in team {
            components.push(ScoreComponent {
                label: format!("{} vs {}", member.localized_name, candidate.localized_name),
                value: self
                    .matchups
                    .score(&member.localized_name, &candidate.localized_name),
            });

            if self.rules.position_bonus != 0.0 && member.position != candidate.position {
                components.push(ScoreComponent {
                    label: format!("Position differs from {}", member.localized_name),
                    value: self.rules.position_bonus,
                });
            }
            if self.rules.attribute_bonus != 0.0 && member.primary_attr != candidate.primary_attr {
                components.push(ScoreComponent {
                    label: format!("Attribute differs from {}", member.localized_name),
                    value: self.rules.attribute_bonus,
                });
            }
        }

        let raw_total = components.iter().map(|c| c.value).sum();

        ScoreBreakdown {
            components,
            raw_total,
            score: self.team_score(team, candidate),
        }
    }

    /// Heroes eligible for selection, best first. With an empty team the
    /// order is alphabetical.
    pub fn rank_candidates(&self, heroes: &[Hero], team: &[Hero], query: &str) -> Vec<HeroScore> {
        let mut ranked: Vec<HeroScore> = available_heroes(heroes, team, query)
            .into_iter()
            .map(|hero| HeroScore::new(hero.clone(), self.team_score(team, hero)))
            .collect();

        if team.is_empty() {
            ranked.sort_by(|a, b| a.hero.localized_name.cmp(&b.hero.localized_name));
        } else {
            ranked.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.hero.localized_name.cmp(&b.hero.localized_name))
            });
        }

        debug!(
            team = team.len(),
            query,
            candidates = ranked.len(),
            "ranked candidates"
        );
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filter::matches_query;
    use crate::catalog::builtin::builtin_catalog;
    use crate::catalog::Catalog;

    fn team(catalog: &Catalog, names: &[&str]) -> Vec<Hero> {
        catalog.find_all(names).unwrap()
    }

    #[test]
    fn single_member_uses_recorded_score() {
        let catalog = builtin_catalog().unwrap();
        let recommender = PickRecommender::new(catalog.matchups(), ScoringRules::default());

        let axe = team(&catalog, &["Axe"]);
        let anti_mage = catalog.find("Anti-Mage").unwrap();
        assert_eq!(recommender.team_score(&axe, anti_mage), 6.0);
    }

    #[test]
    fn members_are_summed() {
        let catalog = builtin_catalog().unwrap();
        let recommender = PickRecommender::new(catalog.matchups(), ScoringRules::default());

        let picked = team(&catalog, &["Axe", "Crystal Maiden"]);
        let invoker = catalog.find("Invoker").unwrap();
        assert_eq!(recommender.team_score(&picked, invoker), -6.0);
    }

    #[test]
    fn empty_team_scores_zero() {
        let catalog = builtin_catalog().unwrap();
        let recommender =
            PickRecommender::new(catalog.matchups(), ScoringRules::with_diversity_bonuses());
        let axe = catalog.find("Axe").unwrap();
        assert_eq!(recommender.team_score(&[], axe), 0.0);
    }

    #[test]
    fn total_is_clamped() {
        let catalog = builtin_catalog().unwrap();
        let mut table = MatchupTable::new();
        table.insert("Axe", "Invoker", 8.0);
        table.insert("Juggernaut", "Invoker", 7.5);
        table.insert("Rubick", "Anti-Mage", -9.0);
        table.insert("Crystal Maiden", "Anti-Mage", -9.0);
        let recommender = PickRecommender::new(&table, ScoringRules::default());

        let high = team(&catalog, &["Axe", "Juggernaut"]);
        assert_eq!(
            recommender.team_score(&high, catalog.find("Invoker").unwrap()),
            SCORE_MAX
        );

        let low = team(&catalog, &["Rubick", "Crystal Maiden"]);
        assert_eq!(
            recommender.team_score(&low, catalog.find("Anti-Mage").unwrap()),
            SCORE_MIN
        );
    }

    #[test]
    fn scores_stay_in_range_for_every_candidate() {
        let catalog = builtin_catalog().unwrap();
        let picked = team(&catalog, &["Anti-Mage", "Axe", "Invoker", "Rubick", "Crystal Maiden"]);

        for rules in [ScoringRules::default(), ScoringRules::with_diversity_bonuses()] {
            let recommender = PickRecommender::new(catalog.matchups(), rules);
            for hero in catalog.heroes() {
                let score = recommender.team_score(&picked, hero);
                assert!((SCORE_MIN..=SCORE_MAX).contains(&score), "{score} out of range");
            }
        }
    }

    #[test]
    fn diversity_bonuses_are_added_before_clamp() {
        let catalog = builtin_catalog().unwrap();
        let recommender =
            PickRecommender::new(catalog.matchups(), ScoringRules::with_diversity_bonuses());

        // Axe: Offlane/Strength, Anti-Mage: Carry/Agility -> 6.0 + 1.0 + 0.5
        let axe = team(&catalog, &["Axe"]);
        let anti_mage = catalog.find("Anti-Mage").unwrap();
        assert_eq!(recommender.team_score(&axe, anti_mage), 7.5);
    }

    #[test]
    fn breakdown_lists_matchups_and_bonuses() {
        let catalog = builtin_catalog().unwrap();
        let recommender =
            PickRecommender::new(catalog.matchups(), ScoringRules::with_diversity_bonuses());

        let picked = team(&catalog, &["Axe", "Crystal Maiden"]);
        let invoker = catalog.find("Invoker").unwrap();
        let breakdown = recommender.breakdown(&picked, invoker);

        let labels: Vec<_> = breakdown.components.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Axe vs Invoker",
                "Position differs from Axe",
                "Attribute differs from Axe",
                "Crystal Maiden vs Invoker",
                "Position differs from Crystal Maiden",
            ]
        );
        assert_eq!(breakdown.raw_total, -6.0 + 1.0 + 0.5 + 1.0);
        assert_eq!(breakdown.score, breakdown.raw_total);
    }

    #[test]
    fn breakdown_without_bonuses_has_one_line_per_member() {
        let catalog = builtin_catalog().unwrap();
        let recommender = PickRecommender::new(catalog.matchups(), ScoringRules::default());

        let picked = team(&catalog, &["Axe", "Crystal Maiden"]);
        let breakdown = recommender.breakdown(&picked, catalog.find("Invoker").unwrap());
        assert_eq!(breakdown.components.len(), 2);
        assert_eq!(breakdown.score, -6.0);
    }

    #[test]
    fn empty_team_ranks_alphabetically() {
        let catalog = builtin_catalog().unwrap();
        let recommender = PickRecommender::new(catalog.matchups(), ScoringRules::default());

        let ranked = recommender.rank_candidates(catalog.heroes(), &[], "");
        let names: Vec<_> = ranked.iter().map(|r| r.hero.localized_name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(ranked.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn team_ranks_by_score_then_name() {
        let catalog = builtin_catalog().unwrap();
        let recommender = PickRecommender::new(catalog.matchups(), ScoringRules::default());

        let axe = team(&catalog, &["Axe"]);
        let ranked = recommender.rank_candidates(catalog.heroes(), &axe, "");

        assert_eq!(ranked[0].hero.localized_name, "Anti-Mage");
        assert_eq!(ranked[0].score, 6.0);
        assert_eq!(ranked[1].hero.localized_name, "Juggernaut");

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].hero.localized_name < pair[1].hero.localized_name);
            }
        }
        assert_eq!(ranked.last().unwrap().hero.localized_name, "Invoker");
    }

    #[test]
    fn query_with_team_ranks_only_matching_heroes() {
        let catalog = builtin_catalog().unwrap();
        let recommender = PickRecommender::new(catalog.matchups(), ScoringRules::default());

        let axe = team(&catalog, &["Axe"]);
        let ranked = recommender.rank_candidates(catalog.heroes(), &axe, "support");

        assert!(!ranked.is_empty());
        assert!(ranked.iter().all(|r| matches_query(&r.hero, "support")));
        assert!(!ranked.iter().any(|r| r.hero.localized_name == "Axe"));

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].hero.localized_name < pair[1].hero.localized_name);
            }
        }

        // Rubick -> Axe is recorded as -2.0, Axe -> Crystal Maiden as -3.0.
        assert_eq!(ranked[0].hero.localized_name, "Rubick");
        assert_eq!(ranked[0].score, 2.0);
        assert_eq!(ranked[1].hero.localized_name, "Abaddon");
        assert_eq!(ranked[1].score, 0.0);
        let last = ranked.last().unwrap();
        assert_eq!(last.hero.localized_name, "Crystal Maiden");
        assert_eq!(last.score, -3.0);
    }

    #[test]
    fn ranking_never_contains_team_members() {
        let catalog = builtin_catalog().unwrap();
        let recommender = PickRecommender::new(catalog.matchups(), ScoringRules::default());

        let picked = team(&catalog, &["Axe", "Crystal Maiden", "Puck"]);
        let ranked = recommender.rank_candidates(catalog.heroes(), &picked, "");
        assert_eq!(ranked.len(), catalog.len() - picked.len());
        assert!(ranked
            .iter()
            .all(|r| !picked.iter().any(|m| m.is_same(&r.hero))));
    }

    #[test]
    fn ranking_is_idempotent() {
        let catalog = builtin_catalog().unwrap();
        let recommender = PickRecommender::new(catalog.matchups(), ScoringRules::default());

        let picked = team(&catalog, &["Anti-Mage", "Rubick"]);
        let first = recommender.rank_candidates(catalog.heroes(), &picked, "a");
        let second = recommender.rank_candidates(catalog.heroes(), &picked, "a");
        assert_eq!(first, second);
    }
}
