use crate::club::player::{Player, PlayerCollection};
use crate::error::EngineError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SQUAD_CAPACITY: usize = 25;
pub const LINEUP_SIZE: usize = 11;

/// Upfront signing fee, charged as a multiple of the player's weekly wage.
pub const SIGNING_FEE_WEEKS: u32 = 4;

pub const REPUTATION_MIN: u8 = 1;
pub const REPUTATION_MAX: u8 = 100;

/// Season record, maintained by the match engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u16,
    pub draws: u16,
    pub losses: u16,
    pub goals_for: i32,
    pub goals_against: i32,
}

impl TeamRecord {
    pub fn matches(&self) -> u16 {
        self.wins + self.draws + self.losses
    }

    pub fn points(&self) -> u16 {
        self.wins * 3 + self.draws
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }
}

/// Snapshot of a team's season used for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStatsSummary {
    pub team_id: u32,
    pub name: String,
    pub matches: u16,
    pub wins: u16,
    pub draws: u16,
    pub losses: u16,
    pub points: u16,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub win_rate: f32,
    pub budget: i64,
    pub squad_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub budget: i64,
    pub players: PlayerCollection,
    /// Ids of the starting eleven, in no particular order. Empty until a
    /// lineup is set.
    lineup: Vec<u32>,
    pub record: TeamRecord,
    /// 1-100, nudged by results.
    pub reputation: u8,
}

impl Team {
    pub fn new(id: u32, name: String, budget: i64) -> Self {
        Team {
            id,
            name,
            budget,
            players: PlayerCollection::default(),
            lineup: Vec::new(),
            record: TeamRecord::default(),
            reputation: 50,
        }
    }

    /// Sign a player on the transfer market. Charges an upfront fee of
    /// [`SIGNING_FEE_WEEKS`] weekly wages; on any failure the squad and
    /// budget are untouched.
    pub fn add_player(&mut self, player: Player) -> Result<(), EngineError> {
        if self.players.len() >= SQUAD_CAPACITY {
            return Err(EngineError::SquadFull {
                capacity: SQUAD_CAPACITY,
            });
        }

        let fee = (player.salary * SIGNING_FEE_WEEKS) as i64;
        if fee > self.budget {
            return Err(EngineError::InsufficientBudget {
                required: fee,
                available: self.budget,
            });
        }

        self.budget -= fee;

        info!(
            "team {}: signed {} for a {} fee",
            self.name, player.name, fee
        );

        self.players.add(player);

        Ok(())
    }

    /// Add a player without a signing fee. Used when assembling an initial
    /// squad; capacity still applies.
    pub fn register_player(&mut self, player: Player) -> Result<(), EngineError> {
        if self.players.len() >= SQUAD_CAPACITY {
            return Err(EngineError::SquadFull {
                capacity: SQUAD_CAPACITY,
            });
        }

        self.players.add(player);

        Ok(())
    }

    /// Release a player from the squad, removing them from the lineup if
    /// selected.
    pub fn remove_player(&mut self, player_id: u32) -> Result<Player, EngineError> {
        let player = self
            .players
            .take_player(player_id)
            .ok_or(EngineError::PlayerNotFound { player_id })?;

        self.lineup.retain(|&id| id != player_id);

        Ok(player)
    }

    /// Select the starting eleven. Rejects anything other than eleven
    /// distinct roster ids, leaving the previous lineup in place.
    pub fn set_lineup(&mut self, player_ids: &[u32]) -> Result<(), EngineError> {
        if player_ids.len() != LINEUP_SIZE {
            return Err(EngineError::InvalidLineup {
                reason: format!(
                    "expected {} players, got {}",
                    LINEUP_SIZE,
                    player_ids.len()
                ),
            });
        }

        let distinct: HashSet<u32> = player_ids.iter().copied().collect();
        if distinct.len() != LINEUP_SIZE {
            return Err(EngineError::InvalidLineup {
                reason: String::from("lineup contains duplicate players"),
            });
        }

        for &id in player_ids {
            if !self.players.contains(id) {
                return Err(EngineError::InvalidLineup {
                    reason: format!("player {} is not in the squad", id),
                });
            }
        }

        self.lineup = player_ids.to_vec();

        Ok(())
    }

    pub fn lineup(&self) -> &[u32] {
        &self.lineup
    }

    pub fn lineup_is_set(&self) -> bool {
        self.lineup.len() == LINEUP_SIZE
    }

    pub fn lineup_players(&self) -> Vec<&Player> {
        self.lineup
            .iter()
            .filter_map(|&id| self.players.get(id))
            .collect()
    }

    pub fn weekly_wage_bill(&self) -> u32 {
        self.players.week_salary()
    }

    /// Pay the full squad's weekly wages. All-or-nothing: a short budget
    /// pays nobody and is reported as an error.
    pub fn pay_wages(&mut self) -> Result<u32, EngineError> {
        let total = self.weekly_wage_bill();

        if (total as i64) > self.budget {
            warn!(
                "team {}: cannot cover the {} wage bill with {} available",
                self.name, total, self.budget
            );
            return Err(EngineError::InsufficientBudget {
                required: total as i64,
                available: self.budget,
            });
        }

        self.budget -= total as i64;

        Ok(total)
    }

    /// Mean performance rating of the selected lineup, 0 when no lineup is
    /// set.
    pub fn team_strength(&self) -> f32 {
        let starters = self.lineup_players();
        if starters.is_empty() {
            return 0.0;
        }

        let total: f32 = starters.iter().map(|p| p.performance_rating()).sum();
        total / starters.len() as f32
    }

    pub fn add_prize_money(&mut self, amount: i64) {
        self.budget += amount;
    }

    /// Fold a finished match into the season record.
    pub(crate) fn record_match(&mut self, goals_for: u8, goals_against: u8) {
        self.record.goals_for += goals_for as i32;
        self.record.goals_against += goals_against as i32;

        if goals_for > goals_against {
            self.record.wins += 1;
            self.reputation = (self.reputation + 1).min(REPUTATION_MAX);
        } else if goals_for == goals_against {
            self.record.draws += 1;
        } else {
            self.record.losses += 1;
            self.reputation = self.reputation.saturating_sub(1).max(REPUTATION_MIN);
        }
    }

    pub fn stats_summary(&self) -> TeamStatsSummary {
        let matches = self.record.matches();
        let win_rate = if matches > 0 {
            self.record.wins as f32 / matches as f32
        } else {
            0.0
        };

        TeamStatsSummary {
            team_id: self.id,
            name: self.name.clone(),
            matches,
            wins: self.record.wins,
            draws: self.record.draws,
            losses: self.record.losses,
            points: self.record.points(),
            goals_for: self.record.goals_for,
            goals_against: self.record.goals_against,
            goal_difference: self.record.goal_difference(),
            win_rate,
            budget: self.budget,
            squad_size: self.players.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::PlayerPosition;

    fn player(id: u32, salary: u32) -> Player {
        Player::new(
            id,
            format!("Player {}", id),
            PlayerPosition::Midfielder,
            70,
            25,
            salary,
        )
    }

    fn team_with_squad(count: u32) -> Team {
        let mut team = Team::new(1, String::from("United FC"), 5_000_000);
        for id in 1..=count {
            team.register_player(player(id, 10_000)).unwrap();
        }
        team
    }

    #[test]
    fn signing_charges_four_weeks_of_wages() {
        let mut team = Team::new(1, String::from("United FC"), 1_000_000);

        team.add_player(player(1, 30_000)).unwrap();

        assert_eq!(team.budget, 1_000_000 - 120_000);
        assert_eq!(team.players.len(), 1);
    }

    #[test]
    fn signing_fails_without_fee_coverage_and_mutates_nothing() {
        let mut team = Team::new(1, String::from("United FC"), 100_000);

        let result = team.add_player(player(1, 30_000));

        assert!(matches!(
            result,
            Err(EngineError::InsufficientBudget {
                required: 120_000,
                available: 100_000
            })
        ));
        assert_eq!(team.budget, 100_000);
        assert!(team.players.is_empty());
    }

    #[test]
    fn squad_capacity_is_enforced() {
        let mut team = team_with_squad(SQUAD_CAPACITY as u32);

        let result = team.register_player(player(99, 10_000));
        assert!(matches!(result, Err(EngineError::SquadFull { .. })));

        let result = team.add_player(player(99, 10_000));
        assert!(matches!(result, Err(EngineError::SquadFull { .. })));
    }

    #[test]
    fn lineup_requires_eleven_distinct_squad_members() {
        let mut team = team_with_squad(12);

        let short: Vec<u32> = (1..=10).collect();
        assert!(team.set_lineup(&short).is_err());

        let mut duplicated: Vec<u32> = (1..=10).collect();
        duplicated.push(1);
        assert!(team.set_lineup(&duplicated).is_err());

        let mut foreign: Vec<u32> = (1..=10).collect();
        foreign.push(999);
        assert!(team.set_lineup(&foreign).is_err());

        assert!(!team.lineup_is_set());

        let valid: Vec<u32> = (1..=11).collect();
        team.set_lineup(&valid).unwrap();
        assert!(team.lineup_is_set());
    }

    #[test]
    fn failed_lineup_change_keeps_the_previous_lineup() {
        let mut team = team_with_squad(12);
        let valid: Vec<u32> = (1..=11).collect();
        team.set_lineup(&valid).unwrap();

        assert!(team.set_lineup(&[1, 2, 3]).is_err());
        assert_eq!(team.lineup(), valid.as_slice());
    }

    #[test]
    fn removing_a_starter_clears_the_lineup_slot() {
        let mut team = team_with_squad(12);
        let valid: Vec<u32> = (1..=11).collect();
        team.set_lineup(&valid).unwrap();

        let removed = team.remove_player(5).unwrap();

        assert_eq!(removed.id, 5);
        assert!(!team.lineup().contains(&5));
        assert!(!team.lineup_is_set());
    }

    #[test]
    fn wages_are_all_or_nothing() {
        let mut team = team_with_squad(5);
        team.budget = 60_000;

        let paid = team.pay_wages().unwrap();
        assert_eq!(paid, 50_000);
        assert_eq!(team.budget, 10_000);

        let result = team.pay_wages();
        assert!(matches!(
            result,
            Err(EngineError::InsufficientBudget {
                required: 50_000,
                available: 10_000
            })
        ));
        assert_eq!(team.budget, 10_000);
    }

    #[test]
    fn strength_is_zero_without_a_lineup() {
        let team = team_with_squad(11);
        assert_eq!(team.team_strength(), 0.0);
    }

    #[test]
    fn strength_averages_the_starting_eleven() {
        let mut team = team_with_squad(11);
        let valid: Vec<u32> = (1..=11).collect();
        team.set_lineup(&valid).unwrap();

        let expected = team.players.get(1).unwrap().performance_rating();
        assert!((team.team_strength() - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn record_keeps_points_consistent() {
        let mut team = team_with_squad(1);
        team.record_match(2, 0);
        team.record_match(1, 1);
        team.record_match(0, 3);

        assert_eq!(team.record.matches(), 3);
        assert_eq!(team.record.points(), 4);
        assert_eq!(team.record.goal_difference(), 0);

        let summary = team.stats_summary();
        assert_eq!(summary.points, 4);
        assert!((summary.win_rate - 1.0 / 3.0).abs() < 1e-6);
    }
}
