use crate::context::SimulationContext;
use crate::error::EngineError;
use crate::league::League;
use crate::r#match::{InjuryEvent, MatchResult};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything that happened during one simulated week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekResult {
    pub week: u32,
    pub match_results: Vec<MatchResult>,
    /// Teams that could not cover their wage bill this week.
    pub wage_failures: Vec<u32>,
    /// Injuries picked up in this week's matches.
    pub injuries: Vec<InjuryEvent>,
}

/// Drives a league through a season, one week at a time, with a seeded
/// random source so runs are reproducible.
pub struct SeasonSimulator {
    pub league: League,
    pub context: SimulationContext,
    rng: StdRng,
}

impl SeasonSimulator {
    pub fn new(league: League, seed: u64) -> Self {
        SeasonSimulator {
            league,
            context: SimulationContext::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Simulate one week: play the current round, settle wages, tick
    /// injury recovery and weekly conditioning, then advance the clock.
    ///
    /// Wage failures never halt the season; they are collected and
    /// reported.
    pub fn advance_week(&mut self) -> Result<WeekResult, EngineError> {
        let week = self.context.week;
        info!("simulating week {}", week);

        let match_results = self.league.play_round(&mut self.rng)?;

        let injuries: Vec<InjuryEvent> = match_results
            .iter()
            .flat_map(|r| r.injuries.iter().cloned())
            .collect();

        let mut wage_failures = Vec::new();
        for team in &mut self.league.teams {
            if let Err(err) = team.pay_wages() {
                warn!("week {}: {} skipped wages ({})", week, team.name, err);
                wage_failures.push(team.id);
            }
        }

        for team in &mut self.league.teams {
            for player in team.players.iter_mut() {
                player.advance_injury();
                player.recover_weekly();
            }
        }

        self.context.advance_week();

        Ok(WeekResult {
            week,
            match_results,
            wage_failures,
            injuries,
        })
    }

    /// Run every remaining week of the season.
    pub fn run_season(&mut self) -> Result<Vec<WeekResult>, EngineError> {
        let mut weeks = Vec::new();

        while !self.is_season_over() {
            weeks.push(self.advance_week()?);
        }

        info!(
            "season complete after {} weeks of play",
            weeks.len()
        );

        Ok(weeks)
    }

    pub fn is_season_over(&self) -> bool {
        self.league.is_season_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerPosition, Team};

    fn squad_team(id: u32, name: &str, budget: i64) -> Team {
        let mut team = Team::new(id, String::from(name), budget);
        let base = id * 100;

        for offset in 0..11u32 {
            let position = match offset {
                0 => PlayerPosition::Goalkeeper,
                1..=4 => PlayerPosition::Defender,
                5..=8 => PlayerPosition::Midfielder,
                _ => PlayerPosition::Forward,
            };
            let player = Player::new(
                base + offset,
                format!("{} Player {}", name, offset),
                position,
                70,
                25,
                10_000,
            );
            team.register_player(player).unwrap();
        }

        let lineup: Vec<u32> = (base..base + 11).collect();
        team.set_lineup(&lineup).unwrap();
        team
    }

    fn simulator_of(n: u32, budget: i64, seed: u64) -> SeasonSimulator {
        let mut league = League::new(String::from("Test League"));
        for id in 1..=n {
            league
                .add_team(squad_team(id, &format!("Team {}", id), budget))
                .unwrap();
        }
        league.generate_fixtures();
        SeasonSimulator::new(league, seed)
    }

    #[test]
    fn a_season_runs_to_completion() {
        let mut simulator = simulator_of(4, 50_000_000, 42);

        let weeks = simulator.run_season().unwrap();

        assert_eq!(weeks.len(), 6);
        assert!(simulator.is_season_over());
        assert_eq!(simulator.context.week, 7);

        for team in &simulator.league.teams {
            assert_eq!(team.record.matches(), 6);
        }

        let total_wins: u16 = simulator.league.teams.iter().map(|t| t.record.wins).sum();
        let total_losses: u16 = simulator
            .league
            .teams
            .iter()
            .map(|t| t.record.losses)
            .sum();
        assert_eq!(total_wins, total_losses);
    }

    #[test]
    fn identical_seeds_reproduce_the_season() {
        let mut first = simulator_of(4, 50_000_000, 7);
        let mut second = simulator_of(4, 50_000_000, 7);

        let first_weeks = first.run_season().unwrap();
        let second_weeks = second.run_season().unwrap();

        assert_eq!(first_weeks, second_weeks);
        assert_eq!(first.league, second.league);
    }

    #[test]
    fn wage_failures_are_reported_without_halting() {
        let mut simulator = simulator_of(2, 0, 5);

        // Wage bills nobody can cover, prize money included.
        for team in &mut simulator.league.teams {
            for player in team.players.iter_mut() {
                player.salary = 200_000;
            }
        }

        let week = simulator.advance_week().unwrap();

        assert_eq!(week.wage_failures.len(), 2);
        assert!(simulator.is_season_over() || simulator.context.week == 2);

        // Budgets keep their prize money; the failed bill is untouched.
        for team in &simulator.league.teams {
            assert!(team.budget >= 0);
        }
    }

    #[test]
    fn injured_players_recover_over_the_weeks() {
        let mut simulator = simulator_of(4, 50_000_000, 13);
        simulator.run_season().unwrap();

        // Season injuries minus weekly recovery can leave at most the
        // configured maximum outstanding.
        for team in &simulator.league.teams {
            for player in team.players.iter() {
                assert!(player.injury_weeks <= 4);
            }
        }
    }
}
