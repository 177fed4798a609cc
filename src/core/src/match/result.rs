use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Result of a match from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Victory,
    Draw,
    Defeat,
}

impl MatchOutcome {
    pub fn from_score(goals_for: u8, goals_against: u8) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => MatchOutcome::Victory,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Defeat,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MatchOutcome::Victory => "Victory",
            MatchOutcome::Draw => "Draw",
            MatchOutcome::Defeat => "Defeat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub team_id: u32,
    pub goals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: TeamScore,
    pub away: TeamScore,
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - {}", self.home.goals, self.away.goals)
    }
}

/// A goal, attributed to a scorer and optionally an assist provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalEvent {
    pub minute: u8,
    pub team_id: u32,
    pub scorer_id: u32,
    pub scorer_name: String,
    pub assist_id: Option<u32>,
    pub assist_name: Option<String>,
}

impl Display for GoalEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.assist_name {
            Some(assist) => write!(
                f,
                "{}' {} (assist: {})",
                self.minute, self.scorer_name, assist
            ),
            None => write!(f, "{}' {}", self.minute, self.scorer_name),
        }
    }
}

/// An injury picked up during a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryEvent {
    pub team_id: u32,
    pub player_id: u32,
    pub player_name: String,
    pub weeks: u8,
}

/// Everything that happened in a single finished match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_team_name: String,
    pub away_team_name: String,
    pub score: Score,
    /// Outcome from the home side's perspective.
    pub outcome: MatchOutcome,
    pub events: Vec<GoalEvent>,
    pub injuries: Vec<InjuryEvent>,
}

impl MatchResult {
    pub fn summary(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home_team_name, self.score.home.goals, self.score.away.goals, self.away_team_name
        )
    }
}
