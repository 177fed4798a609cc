use crate::club::Team;
use crate::error::EngineError;
use crate::r#match::result::{
    GoalEvent, InjuryEvent, MatchOutcome, MatchResult, Score, TeamScore,
};
use log::info;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the home side's strength.
pub const HOME_ADVANTAGE: f32 = 1.1;

pub const MIN_CHANCES: u8 = 3;
pub const MAX_CHANCES: u8 = 8;

/// Per-chance conversion scaling. A chance converts with probability
/// attack_factor * CHANCE_CONVERSION, where attack_factor is strength / 10.
pub const CHANCE_CONVERSION: f32 = 0.15;

pub const MAX_GOALS: u8 = 6;

pub const ASSIST_PROBABILITY: f64 = 0.7;

/// Minimum multiplier a player's form contributes to attribution weights.
pub const FORM_BONUS_FLOOR: f32 = 0.5;

pub const PRIZE_WIN: i64 = 1_000_000;
pub const PRIZE_DRAW: i64 = 300_000;

/// A single fixture between two teams, playable exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub played: bool,
}

impl Match {
    pub fn new(home_team_id: u32, away_team_id: u32) -> Self {
        Match {
            home_team_id,
            away_team_id,
            played: false,
        }
    }

    /// Simulate the match, mutating both teams: player statistics, match
    /// load, injuries, season records and prize money.
    pub fn play(
        &mut self,
        home: &mut Team,
        away: &mut Team,
        rng: &mut impl Rng,
    ) -> Result<MatchResult, EngineError> {
        if self.played {
            return Err(EngineError::MatchAlreadyPlayed);
        }

        if !home.lineup_is_set() {
            return Err(EngineError::LineupNotSet {
                team_name: home.name.clone(),
            });
        }

        if !away.lineup_is_set() {
            return Err(EngineError::LineupNotSet {
                team_name: away.name.clone(),
            });
        }

        let home_strength = home.team_strength() * HOME_ADVANTAGE;
        let away_strength = away.team_strength();

        let home_goals = generate_goals(home_strength / 10.0, rng);
        let away_goals = generate_goals(away_strength / 10.0, rng);

        let mut events = Vec::with_capacity((home_goals + away_goals) as usize);
        attribute_goals(home, home_goals, rng, &mut events);
        attribute_goals(away, away_goals, rng, &mut events);
        events.sort_by_key(|e| e.minute);

        let mut injuries = Vec::new();
        apply_match_load(home, rng, &mut injuries);
        apply_match_load(away, rng, &mut injuries);

        home.record_match(home_goals, away_goals);
        away.record_match(away_goals, home_goals);

        if home_goals > away_goals {
            home.add_prize_money(PRIZE_WIN);
        } else if away_goals > home_goals {
            away.add_prize_money(PRIZE_WIN);
        } else {
            home.add_prize_money(PRIZE_DRAW);
            away.add_prize_money(PRIZE_DRAW);
        }

        self.played = true;

        let result = MatchResult {
            home_team_id: home.id,
            away_team_id: away.id,
            home_team_name: home.name.clone(),
            away_team_name: away.name.clone(),
            score: Score {
                home: TeamScore {
                    team_id: home.id,
                    goals: home_goals,
                },
                away: TeamScore {
                    team_id: away.id,
                    goals: away_goals,
                },
            },
            outcome: MatchOutcome::from_score(home_goals, away_goals),
            events,
            injuries,
        };

        info!(
            "match finished: {} ({} for the home side)",
            result.summary(),
            result.outcome.display_name()
        );

        Ok(result)
    }
}

/// Convert a team's attack factor into a goal count through a series of
/// chances. Capped at [`MAX_GOALS`].
fn generate_goals(attack_factor: f32, rng: &mut impl Rng) -> u8 {
    let chances: u8 = rng.random_range(MIN_CHANCES..=MAX_CHANCES);
    let conversion = (attack_factor * CHANCE_CONVERSION).clamp(0.0, 1.0);

    let mut goals = 0;
    for _ in 0..chances {
        if rng.random::<f32>() < conversion {
            goals += 1;
            if goals == MAX_GOALS {
                break;
            }
        }
    }

    goals
}

fn form_bonus(form: u8) -> f32 {
    ((form as f32 - 50.0) / 50.0).max(FORM_BONUS_FLOOR)
}

/// Weighted draw over (id, weight) candidates. Zero-weight candidates are
/// never selected; returns None when all weights are zero.
pub(crate) fn select_weighted(candidates: &[(u32, f32)], rng: &mut impl Rng) -> Option<u32> {
    if candidates.iter().all(|(_, w)| *w <= 0.0) {
        return None;
    }

    candidates
        .choose_weighted(rng, |(_, weight)| *weight)
        .ok()
        .map(|(id, _)| *id)
}

/// Attribute each of a team's goals to a scorer and (usually) an assist
/// provider, updating player statistics in place.
fn attribute_goals(team: &mut Team, goals: u8, rng: &mut impl Rng, events: &mut Vec<GoalEvent>) {
    if goals == 0 {
        return;
    }

    let scorer_pool: Vec<(u32, f32)> = team
        .lineup_players()
        .iter()
        .map(|p| (p.id, p.position.scorer_weight() * form_bonus(p.form)))
        .collect();

    let assist_pool: Vec<(u32, f32)> = team
        .lineup_players()
        .iter()
        .map(|p| (p.id, p.position.assist_weight() * form_bonus(p.form)))
        .collect();

    for _ in 0..goals {
        let Some(scorer_id) = select_weighted(&scorer_pool, rng) else {
            continue;
        };

        // An assist from the scorer themselves is discarded rather than
        // redrawn, so a fraction of goals come unassisted.
        let assist_id = if rng.random_bool(ASSIST_PROBABILITY) {
            select_weighted(&assist_pool, rng).filter(|&id| id != scorer_id)
        } else {
            None
        };

        let minute: u8 = rng.random_range(1..=90);

        let scorer_name = match team.players.get_mut(scorer_id) {
            Some(scorer) => {
                scorer.statistics.goals += 1;
                scorer.name.clone()
            }
            None => continue,
        };

        let assist_name = assist_id.and_then(|id| {
            team.players.get_mut(id).map(|assistant| {
                assistant.statistics.assists += 1;
                assistant.name.clone()
            })
        });

        events.push(GoalEvent {
            minute,
            team_id: team.id,
            scorer_id,
            scorer_name,
            assist_id,
            assist_name,
        });
    }
}

/// Apply match load to every starter, collecting any injuries picked up.
fn apply_match_load(team: &mut Team, rng: &mut impl Rng, injuries: &mut Vec<InjuryEvent>) {
    let lineup: Vec<u32> = team.lineup().to_vec();
    let team_id = team.id;

    for id in lineup {
        if let Some(player) = team.players.get_mut(id) {
            if let Some(weeks) = player.apply_match_load(rng) {
                injuries.push(InjuryEvent {
                    team_id,
                    player_id: id,
                    player_name: player.name.clone(),
                    weeks,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerPosition};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn uniform_player(id: u32, position: PlayerPosition) -> Player {
        let mut p = Player::new(id, format!("Player {}", id), position, 70, 25, 10_000);
        p.morale = 50;
        p.form = 70;
        p
    }

    fn uniform_team(id: u32, name: &str) -> Team {
        let mut team = Team::new(id, String::from(name), 5_000_000);
        let positions = [
            PlayerPosition::Goalkeeper,
            PlayerPosition::Defender,
            PlayerPosition::Defender,
            PlayerPosition::Defender,
            PlayerPosition::Defender,
            PlayerPosition::Midfielder,
            PlayerPosition::Midfielder,
            PlayerPosition::Midfielder,
            PlayerPosition::Midfielder,
            PlayerPosition::Forward,
            PlayerPosition::Forward,
        ];

        let base = id * 100;
        for (offset, &position) in positions.iter().enumerate() {
            team.register_player(uniform_player(base + offset as u32, position))
                .unwrap();
        }

        let lineup: Vec<u32> = (base..base + 11).collect();
        team.set_lineup(&lineup).unwrap();
        team
    }

    #[test]
    fn played_match_produces_a_coherent_result() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut home = uniform_team(1, "Rovers");
        let mut away = uniform_team(2, "City");
        let mut fixture = Match::new(1, 2);

        let result = fixture.play(&mut home, &mut away, &mut rng).unwrap();

        assert!(result.score.home.goals <= MAX_GOALS);
        assert!(result.score.away.goals <= MAX_GOALS);
        assert_eq!(
            result.outcome,
            MatchOutcome::from_score(result.score.home.goals, result.score.away.goals)
        );

        assert_eq!(home.record.matches(), 1);
        assert_eq!(away.record.matches(), 1);
        assert_eq!(home.record.goals_for, result.score.home.goals as i32);
        assert_eq!(away.record.goals_for, result.score.away.goals as i32);

        match result.outcome {
            MatchOutcome::Victory => {
                assert_eq!(home.record.points(), 3);
                assert_eq!(away.record.points(), 0);
                assert_eq!(home.budget, 5_000_000 + PRIZE_WIN);
                assert_eq!(away.budget, 5_000_000);
            }
            MatchOutcome::Draw => {
                assert_eq!(home.record.points(), 1);
                assert_eq!(away.record.points(), 1);
                assert_eq!(home.budget, 5_000_000 + PRIZE_DRAW);
                assert_eq!(away.budget, 5_000_000 + PRIZE_DRAW);
            }
            MatchOutcome::Defeat => {
                assert_eq!(home.record.points(), 0);
                assert_eq!(away.record.points(), 3);
                assert_eq!(home.budget, 5_000_000);
                assert_eq!(away.budget, 5_000_000 + PRIZE_WIN);
            }
        }
    }

    #[test]
    fn attributed_goals_and_assists_match_the_score() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut home = uniform_team(1, "Rovers");
        let mut away = uniform_team(2, "City");
        let mut fixture = Match::new(1, 2);

        let result = fixture.play(&mut home, &mut away, &mut rng).unwrap();

        let total_goals = result.score.home.goals as usize + result.score.away.goals as usize;
        assert_eq!(result.events.len(), total_goals);

        let home_scored: u16 = home.players.iter().map(|p| p.statistics.goals).sum();
        let away_scored: u16 = away.players.iter().map(|p| p.statistics.goals).sum();
        assert_eq!(home_scored, result.score.home.goals as u16);
        assert_eq!(away_scored, result.score.away.goals as u16);

        let assists: u16 = home
            .players
            .iter()
            .chain(away.players.iter())
            .map(|p| p.statistics.assists)
            .sum();
        assert!(assists as usize <= total_goals);

        for event in &result.events {
            assert!((1..=90).contains(&event.minute));
            assert_ne!(event.assist_id, Some(event.scorer_id));
        }
    }

    #[test]
    fn match_load_hits_every_starter_exactly_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut home = uniform_team(1, "Rovers");
        let mut away = uniform_team(2, "City");
        let mut fixture = Match::new(1, 2);

        fixture.play(&mut home, &mut away, &mut rng).unwrap();

        for player in home.players.iter().chain(away.players.iter()) {
            assert_eq!(player.statistics.played, 1);
            assert_eq!(player.stamina, 75);
            assert_eq!(player.fatigue, 15);
        }
    }

    #[test]
    fn a_match_cannot_be_replayed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut home = uniform_team(1, "Rovers");
        let mut away = uniform_team(2, "City");
        let mut fixture = Match::new(1, 2);

        fixture.play(&mut home, &mut away, &mut rng).unwrap();
        let second = fixture.play(&mut home, &mut away, &mut rng);

        assert!(matches!(second, Err(EngineError::MatchAlreadyPlayed)));
    }

    #[test]
    fn a_missing_lineup_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut home = uniform_team(1, "Rovers");
        let mut away = Team::new(2, String::from("City"), 5_000_000);
        let mut fixture = Match::new(1, 2);

        let result = fixture.play(&mut home, &mut away, &mut rng);

        assert!(matches!(result, Err(EngineError::LineupNotSet { .. })));
        assert!(!fixture.played);
        assert_eq!(home.record.matches(), 0);
    }

    #[test]
    fn zero_attack_never_scores() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert_eq!(generate_goals(0.0, &mut rng), 0);
        }
    }

    #[test]
    fn goals_stay_within_the_cap() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..1000 {
            assert!(generate_goals(10.0, &mut rng) <= MAX_GOALS);
        }
    }

    #[test]
    fn zero_weight_candidates_are_never_selected() {
        let mut rng = StdRng::seed_from_u64(12);
        let candidates = [(1u32, 0.0f32), (2, 1.0), (3, 0.0)];

        for _ in 0..10_000 {
            assert_eq!(select_weighted(&candidates, &mut rng), Some(2));
        }

        let all_zero = [(1u32, 0.0f32), (2, 0.0)];
        assert_eq!(select_weighted(&all_zero, &mut rng), None);
    }
}
