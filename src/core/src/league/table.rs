use crate::club::{PlayerPosition, Team};
use itertools::Itertools;
use std::cmp::Reverse;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One line of the standings.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueTableRow {
    /// 1-based table position.
    pub position: usize,
    pub team_id: u32,
    pub team_name: String,
    pub matches: u16,
    pub wins: u16,
    pub draws: u16,
    pub losses: u16,
    pub points: u16,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub budget: i64,
    pub squad_size: usize,
}

/// Standings sorted by points, then goal difference, then goals scored.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn from_teams(teams: &[Team]) -> Self {
        let rows = teams
            .iter()
            .sorted_by_key(|t| {
                (
                    Reverse(t.record.points()),
                    Reverse(t.record.goal_difference()),
                    Reverse(t.record.goals_for),
                )
            })
            .enumerate()
            .map(|(idx, t)| LeagueTableRow {
                position: idx + 1,
                team_id: t.id,
                team_name: t.name.clone(),
                matches: t.record.matches(),
                wins: t.record.wins,
                draws: t.record.draws,
                losses: t.record.losses,
                points: t.record.points(),
                goals_for: t.record.goals_for,
                goals_against: t.record.goals_against,
                goal_difference: t.record.goal_difference(),
                budget: t.budget,
                squad_size: t.players.len(),
            })
            .collect();

        LeagueTable { rows }
    }

    pub fn leader(&self) -> Option<&LeagueTableRow> {
        self.rows.first()
    }

    pub fn row_for(&self, team_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|r| r.team_id == team_id)
    }
}

impl Display for LeagueTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(
            f,
            "{:>3} {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
            "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
        )?;

        for row in &self.rows {
            writeln!(
                f,
                "{:>3} {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
                row.position,
                row.team_name,
                row.matches,
                row.wins,
                row.draws,
                row.losses,
                row.goals_for,
                row.goals_against,
                row.goal_difference,
                row.points
            )?;
        }

        Ok(())
    }
}

/// One line of a player leaderboard (top scorers or top assisters).
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLeaderboardRow {
    pub player_id: u32,
    pub player_name: String,
    pub team_name: String,
    pub position: PlayerPosition,
    pub goals: u16,
    pub assists: u16,
    pub played: u16,
}

pub(crate) fn top_players_by<F>(teams: &[Team], limit: usize, key: F) -> Vec<PlayerLeaderboardRow>
where
    F: Fn(&PlayerLeaderboardRow) -> u16,
{
    teams
        .iter()
        .flat_map(|team| {
            team.players.iter().map(|p| PlayerLeaderboardRow {
                player_id: p.id,
                player_name: p.name.clone(),
                team_name: team.name.clone(),
                position: p.position,
                goals: p.statistics.goals,
                assists: p.statistics.assists,
                played: p.statistics.played,
            })
        })
        .sorted_by_key(|row| Reverse(key(row)))
        .take(limit)
        .collect()
}
