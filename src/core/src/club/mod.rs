pub mod player;
pub mod team;

pub use player::{Player, PlayerCollection, PlayerPosition, PlayerStatistics};
pub use team::{Team, TeamRecord, TeamStatsSummary, LINEUP_SIZE, SQUAD_CAPACITY};
