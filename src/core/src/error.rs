use thiserror::Error;

/// Failures reported by engine operations.
///
/// Every variant is locally recoverable: the caller can adjust its inputs
/// and retry. No partial mutation happens on the error path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("squad is at capacity ({capacity} players)")]
    SquadFull { capacity: usize },

    #[error("insufficient budget: required {required}, available {available}")]
    InsufficientBudget { required: i64, available: i64 },

    #[error("player {player_id} is not on the roster")]
    PlayerNotFound { player_id: u32 },

    #[error("team {team_id} is not in the league")]
    TeamNotFound { team_id: u32 },

    #[error("invalid lineup: {reason}")]
    InvalidLineup { reason: String },

    #[error("team '{team_name}' has no starting lineup set")]
    LineupNotSet { team_name: String },

    #[error("match has already been played")]
    MatchAlreadyPlayed,

    #[error("team {team_id} is already in the league")]
    DuplicateTeam { team_id: u32 },
}
