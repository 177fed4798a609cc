use crate::club::Team;
use crate::error::EngineError;
use crate::league::schedule::Schedule;
use crate::league::table::{top_players_by, LeagueTable, PlayerLeaderboardRow};
use crate::r#match::{Match, MatchResult};
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single-division league: its teams, the season schedule and the round
/// cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub name: String,
    pub teams: Vec<Team>,
    pub schedule: Schedule,
    /// Next round to play, 1-based. Stays past the last round once the
    /// season is over.
    pub current_round: u16,
}

impl League {
    pub fn new(name: String) -> Self {
        League {
            name,
            teams: Vec::new(),
            schedule: Schedule::default(),
            current_round: 1,
        }
    }

    pub fn add_team(&mut self, team: Team) -> Result<(), EngineError> {
        if self.teams.iter().any(|t| t.id == team.id) {
            return Err(EngineError::DuplicateTeam { team_id: team.id });
        }

        debug!("league {}: added team {}", self.name, team.name);

        self.teams.push(team);

        Ok(())
    }

    /// Build a fresh double round-robin schedule over the current teams
    /// and rewind the round cursor.
    pub fn generate_fixtures(&mut self) {
        let ids: Vec<u32> = self.teams.iter().map(|t| t.id).collect();
        self.schedule = Schedule::double_round_robin(&ids);
        self.current_round = 1;

        info!(
            "league {}: scheduled {} fixtures over {} rounds",
            self.name,
            self.schedule.len(),
            self.schedule.rounds
        );
    }

    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Borrow two distinct teams mutably at once.
    fn two_teams_mut(&mut self, first_id: u32, second_id: u32) -> Option<(&mut Team, &mut Team)> {
        let first_idx = self.teams.iter().position(|t| t.id == first_id)?;
        let second_idx = self.teams.iter().position(|t| t.id == second_id)?;

        if first_idx == second_idx {
            return None;
        }

        if first_idx < second_idx {
            let (left, right) = self.teams.split_at_mut(second_idx);
            Some((&mut left[first_idx], &mut right[0]))
        } else {
            let (left, right) = self.teams.split_at_mut(first_idx);
            Some((&mut right[0], &mut left[second_idx]))
        }
    }

    /// Play every unplayed fixture of the current round and advance the
    /// cursor. Returns an empty list once the season is complete.
    ///
    /// A failure mid-round leaves the finished fixtures marked played, so
    /// the caller can fix its lineups and retry without replaying them.
    pub fn play_round(&mut self, rng: &mut impl Rng) -> Result<Vec<MatchResult>, EngineError> {
        if self.is_season_complete() {
            return Ok(Vec::new());
        }

        let round = self.current_round;
        let pairings: Vec<(u32, u32)> = self
            .schedule
            .fixtures_for_round(round)
            .filter(|f| !f.played)
            .map(|f| (f.home_team_id, f.away_team_id))
            .collect();

        let mut results = Vec::with_capacity(pairings.len());

        for (home_id, away_id) in pairings {
            let (home, away) = self
                .two_teams_mut(home_id, away_id)
                .ok_or(EngineError::TeamNotFound { team_id: home_id })?;

            let mut fixture = Match::new(home_id, away_id);
            let result = fixture.play(home, away, rng)?;

            if let Some(entry) = self
                .schedule
                .fixtures
                .iter_mut()
                .find(|f| f.round == round && f.home_team_id == home_id)
            {
                entry.played = true;
                entry.score = Some((result.score.home.goals, result.score.away.goals));
            }

            results.push(result);
        }

        self.current_round += 1;

        Ok(results)
    }

    pub fn standings(&self) -> LeagueTable {
        LeagueTable::from_teams(&self.teams)
    }

    pub fn top_scorers(&self, limit: usize) -> Vec<PlayerLeaderboardRow> {
        top_players_by(&self.teams, limit, |row| row.goals)
    }

    pub fn top_assists(&self, limit: usize) -> Vec<PlayerLeaderboardRow> {
        top_players_by(&self.teams, limit, |row| row.assists)
    }

    pub fn is_season_complete(&self) -> bool {
        self.schedule.is_empty() || self.current_round > self.schedule.rounds
    }
}
