pub mod player;
pub mod position;
pub mod statistics;

pub use player::{Player, PlayerCollection};
pub use position::PlayerPosition;
pub use statistics::PlayerStatistics;
