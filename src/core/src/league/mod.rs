pub mod league;
pub mod schedule;
pub mod table;

pub use league::League;
pub use schedule::{Fixture, Schedule};
pub use table::{LeagueTable, LeagueTableRow, PlayerLeaderboardRow};
