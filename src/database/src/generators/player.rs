use fm_core::{Player, PlayerPosition};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

static PLAYER_ID_SEQUENCE: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(1));

const FIRST_NAMES: &[&str] = &[
    "Jack", "Oliver", "Harry", "George", "Liam", "Marco", "Carlos", "Diego", "Luis", "Andre",
    "Kevin", "Thomas", "James", "Daniel", "Lucas", "Pedro", "Juan", "Miguel",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Williams", "Taylor", "Brown", "Silva", "Santos", "Garcia", "Martinez",
    "Rodriguez", "Muller", "Schmidt", "Rossi", "Ferrari", "Costa", "Pereira", "Lopez", "Gonzalez",
];

pub const STARTER_SKILL_MIN: u8 = 70;
pub const STARTER_SKILL_MAX: u8 = 85;
pub const RESERVE_SKILL_MIN: u8 = 60;
pub const RESERVE_SKILL_MAX: u8 = 75;

pub const AGE_MIN: u8 = 18;
pub const AGE_MAX: u8 = 32;

pub struct PlayerGenerator;

impl PlayerGenerator {
    /// Generate a random player for the given position. Starters draw
    /// their skill from a higher band than reserves.
    pub fn generate(position: PlayerPosition, is_starter: bool, rng: &mut impl Rng) -> Player {
        let id = PLAYER_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst);

        let skill = if is_starter {
            rng.random_range(STARTER_SKILL_MIN..=STARTER_SKILL_MAX)
        } else {
            rng.random_range(RESERVE_SKILL_MIN..=RESERVE_SKILL_MAX)
        };

        let age = rng.random_range(AGE_MIN..=AGE_MAX);
        let salary = skill as u32 * 10_000 + rng.random_range(5_000..=20_000);

        let mut player = Player::new(id, Self::generate_name(rng), position, skill, age, salary);
        player.form = rng.random_range(60..=85);
        player
    }

    fn generate_name(rng: &mut impl Rng) -> String {
        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
        let last = LAST_NAMES.choose(rng).copied().unwrap_or("Walker");

        format!("{} {}", first, last)
    }
}
