pub mod filter;
pub mod matchup;
pub mod recommender;
