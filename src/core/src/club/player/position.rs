use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Playing position. The closed set makes weight tables and lineup
/// validation exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 4] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::Defender,
        PlayerPosition::Midfielder,
        PlayerPosition::Forward,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GK",
            PlayerPosition::Defender => "DEF",
            PlayerPosition::Midfielder => "MID",
            PlayerPosition::Forward => "FWD",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "Goalkeeper",
            PlayerPosition::Defender => "Defender",
            PlayerPosition::Midfielder => "Midfielder",
            PlayerPosition::Forward => "Forward",
        }
    }

    /// Base weight when attributing a goal to a starter.
    pub fn scorer_weight(&self) -> f32 {
        match self {
            PlayerPosition::Forward => 5.0,
            PlayerPosition::Midfielder => 2.0,
            PlayerPosition::Defender => 1.0,
            PlayerPosition::Goalkeeper => 0.2,
        }
    }

    /// Base weight when attributing an assist. Goalkeepers never assist.
    pub fn assist_weight(&self) -> f32 {
        match self {
            PlayerPosition::Midfielder => 4.0,
            PlayerPosition::Forward => 2.0,
            PlayerPosition::Defender => 1.0,
            PlayerPosition::Goalkeeper => 0.0,
        }
    }

}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for PlayerPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GK" | "Goalkeeper" => Ok(PlayerPosition::Goalkeeper),
            "DEF" | "Defender" => Ok(PlayerPosition::Defender),
            "MID" | "Midfielder" => Ok(PlayerPosition::Midfielder),
            "FWD" | "Forward" => Ok(PlayerPosition::Forward),
            _ => Err(format!("'{}' is not a valid player position", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_naming_schemes() {
        assert_eq!(
            "GK".parse::<PlayerPosition>().unwrap(),
            PlayerPosition::Goalkeeper
        );
        assert_eq!(
            "Forward".parse::<PlayerPosition>().unwrap(),
            PlayerPosition::Forward
        );
        assert!("Striker".parse::<PlayerPosition>().is_err());
    }

    #[test]
    fn forwards_carry_the_highest_scorer_weight() {
        let mut weights: Vec<f32> = PlayerPosition::ALL
            .iter()
            .map(|p| p.scorer_weight())
            .collect();
        weights.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(weights.last().copied(), Some(5.0));
        assert!(PlayerPosition::Goalkeeper.scorer_weight() > 0.0);
        assert_eq!(PlayerPosition::Goalkeeper.assist_weight(), 0.0);
    }
}
