pub mod engine;
pub mod result;

pub use engine::Match;
pub use result::{GoalEvent, InjuryEvent, MatchOutcome, MatchResult, Score, TeamScore};
