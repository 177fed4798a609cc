use crate::club::player::position::PlayerPosition;
use crate::club::player::statistics::PlayerStatistics;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

pub const STAMINA_MAX: u8 = 100;
pub const MORALE_MAX: u8 = 100;
pub const FATIGUE_MAX: u8 = 100;
pub const FORM_MIN: u8 = 50;
pub const FORM_MAX: u8 = 95;
pub const SKILL_MAX: u8 = 99;

/// Training stops improving skill at this ceiling, a few points short of
/// the absolute maximum.
pub const SKILL_TRAIN_CEILING: u8 = 95;
pub const TRAIN_STAMINA_FLOOR: u8 = 20;
pub const TRAIN_STAMINA_COST: u8 = 15;
pub const TRAIN_IMPROVE_CHANCE: f64 = 0.3;

pub const REST_STAMINA_RECOVERY: u8 = 30;
pub const REST_MORALE_RECOVERY: u8 = 5;
pub const REST_FATIGUE_RECOVERY: u8 = 10;

pub const WEEKLY_STAMINA_RECOVERY: u8 = 20;
pub const WEEKLY_FATIGUE_RECOVERY: u8 = 10;

pub const MATCH_STAMINA_COST: u8 = 25;
pub const MATCH_FATIGUE_GAIN: u8 = 15;

pub const INJURY_PROBABILITY: f64 = 0.05;
pub const INJURY_WEEKS_MIN: u8 = 1;
pub const INJURY_WEEKS_MAX: u8 = 4;
pub const INJURY_RATING_PENALTY: f32 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPosition,
    pub age: u8,
    /// Overall ability, 1-99.
    pub skill: u8,
    /// Freshness, 0-100. Consumed by matches and training.
    pub stamina: u8,
    /// 0-100.
    pub morale: u8,
    /// Current form, 50-95. Feeds the performance rating and the goal
    /// attribution weights.
    pub form: u8,
    /// Accumulated tiredness, 0-100. Inverse of freshness: grows with
    /// match load, falls with rest.
    pub fatigue: u8,
    /// Weekly wage.
    pub salary: u32,
    /// Advisory valuation, never charged directly.
    pub market_value: u32,
    /// Weeks until fit again. The player is injured iff this is non-zero.
    pub injury_weeks: u8,
    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn new(
        id: u32,
        name: String,
        position: PlayerPosition,
        skill: u8,
        age: u8,
        salary: u32,
    ) -> Self {
        let skill = skill.clamp(1, SKILL_MAX);

        Player {
            id,
            name,
            position,
            age,
            skill,
            stamina: STAMINA_MAX,
            morale: 75,
            form: 70,
            fatigue: 0,
            salary,
            market_value: skill as u32 * 500_000,
            injury_weeks: 0,
            statistics: PlayerStatistics::default(),
        }
    }

    #[inline]
    pub fn is_injured(&self) -> bool {
        self.injury_weeks > 0
    }

    /// Train the player. Costs stamina whenever the player is fit enough
    /// to take part; improvement itself is probabilistic.
    ///
    /// Returns the actual skill gain (0 if none).
    pub fn train(&mut self, rng: &mut impl Rng) -> u8 {
        if self.stamina <= TRAIN_STAMINA_FLOOR {
            return 0;
        }

        self.stamina -= TRAIN_STAMINA_COST;

        if self.skill >= SKILL_TRAIN_CEILING || !rng.random_bool(TRAIN_IMPROVE_CHANCE) {
            return 0;
        }

        let improvement: u8 = rng.random_range(0..=2);
        let before = self.skill;
        self.skill = (self.skill + improvement).min(SKILL_TRAIN_CEILING);

        let gained = self.skill - before;
        if gained > 0 {
            debug!("player {}: training improved skill by {}", self.name, gained);
        }

        gained
    }

    /// Explicit rest: recovers stamina and morale toward their maxima and
    /// works off some fatigue.
    pub fn rest(&mut self) {
        self.stamina = (self.stamina + REST_STAMINA_RECOVERY).min(STAMINA_MAX);
        self.morale = (self.morale + REST_MORALE_RECOVERY).min(MORALE_MAX);
        self.fatigue = self.fatigue.saturating_sub(REST_FATIGUE_RECOVERY);
    }

    /// Passive weekly recovery for players who are not injured. Applied by
    /// the season driver between rounds.
    pub fn recover_weekly(&mut self) {
        if self.is_injured() {
            return;
        }

        self.stamina = (self.stamina + WEEKLY_STAMINA_RECOVERY).min(STAMINA_MAX);
        self.fatigue = self.fatigue.saturating_sub(WEEKLY_FATIGUE_RECOVERY);
    }

    /// Match participation cost, applied exactly once per started match.
    /// Returns the injury duration if the accompanying injury roll hits.
    pub fn apply_match_load(&mut self, rng: &mut impl Rng) -> Option<u8> {
        self.stamina = self.stamina.saturating_sub(MATCH_STAMINA_COST);
        self.fatigue = (self.fatigue + MATCH_FATIGUE_GAIN).min(FATIGUE_MAX);
        self.statistics.played += 1;

        self.roll_injury(rng)
    }

    /// Independent injury roll. An already-injured player is not re-rolled;
    /// durations never stack.
    pub fn roll_injury(&mut self, rng: &mut impl Rng) -> Option<u8> {
        if self.is_injured() {
            return None;
        }

        if rng.random::<f64>() >= INJURY_PROBABILITY {
            return None;
        }

        let weeks: u8 = rng.random_range(INJURY_WEEKS_MIN..=INJURY_WEEKS_MAX);
        self.injury_weeks = weeks;

        debug!("player {}: injured for {} weeks", self.name, weeks);

        Some(weeks)
    }

    /// One week of injury recovery. Called once per elapsed week, not per
    /// match.
    pub fn advance_injury(&mut self) {
        if self.injury_weeks == 0 {
            return;
        }

        self.injury_weeks -= 1;

        if self.injury_weeks == 0 {
            debug!("player {}: recovered from injury", self.name);
        }
    }

    /// Deterministic match performance rating.
    ///
    /// Combines skill with form, morale, stamina and fatigue modifiers; an
    /// injured player takes a flat penalty large enough to dominate the
    /// score. Capped above at 99, deliberately not floored: a floor would
    /// let an injured player tie a healthy one of equal skill.
    pub fn performance_rating(&self) -> f32 {
        let base = self.skill as f32;
        let form_bonus = (self.form as f32 - 70.0) * 0.3;
        let morale_bonus = (self.morale as f32 - 50.0) * 0.15;
        let stamina_penalty = (100.0 - self.stamina as f32) * 0.1;
        let fatigue_penalty = self.fatigue as f32 * 0.1;
        let injury_penalty = if self.is_injured() {
            INJURY_RATING_PENALTY
        } else {
            0.0
        };

        (base + form_bonus + morale_bonus - stamina_penalty - fatigue_penalty - injury_penalty)
            .min(SKILL_MAX as f32)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({}) - {}", self.name, self.position, self.skill)
    }
}

/// Roster container with id-based lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn take_player(&mut self, player_id: u32) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == player_id)?;
        Some(self.players.remove(idx))
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn get(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn get_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn by_position(&self, position: PlayerPosition) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .collect()
    }

    pub fn week_salary(&self) -> u32 {
        self.players.iter().map(|p| p.salary).sum()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }
}
