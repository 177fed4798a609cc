use serde::{Deserialize, Serialize};

/// Career counters accumulated over a player's matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub played: u16,
    pub goals: u16,
    pub assists: u16,
}
