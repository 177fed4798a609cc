pub mod club;
pub mod context;
pub mod error;
pub mod league;
pub mod r#match;
pub mod shared;
pub mod simulator;
pub mod utils;

// Re-export club items
pub use club::{
    Player, PlayerCollection, PlayerPosition, PlayerStatistics,
    Team, TeamRecord, TeamStatsSummary,
    LINEUP_SIZE, SQUAD_CAPACITY,
};

pub use context::SimulationContext;
pub use error::EngineError;

// Re-export league items
pub use league::{
    Fixture, League, LeagueTable, LeagueTableRow, PlayerLeaderboardRow, Schedule,
};

// Re-export match items
pub use r#match::{
    GoalEvent, InjuryEvent, Match, MatchOutcome, MatchResult, Score, TeamScore,
};

pub use simulator::{SeasonSimulator, WeekResult};
