pub mod team;

pub use team::{Team, TeamRecord, TeamStatsSummary, LINEUP_SIZE, SQUAD_CAPACITY};
