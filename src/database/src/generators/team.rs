use crate::generators::PlayerGenerator;
use fm_core::{Player, PlayerPosition, Team, LINEUP_SIZE};
use log::debug;
use rand::Rng;

/// Squad template: (position, squad count, starter count).
const SQUAD_TEMPLATE: [(PlayerPosition, usize, usize); 4] = [
    (PlayerPosition::Goalkeeper, 2, 1),
    (PlayerPosition::Defender, 6, 4),
    (PlayerPosition::Midfielder, 6, 4),
    (PlayerPosition::Forward, 4, 2),
];

pub struct TeamGenerator;

impl TeamGenerator {
    /// Generate a team with a full squad and a starting lineup picked by
    /// performance rating within each position group.
    pub fn generate(id: u32, name: &str, budget: i64, rng: &mut impl Rng) -> Team {
        let mut team = Team::new(id, String::from(name), budget);

        for (position, count, starter_count) in SQUAD_TEMPLATE {
            for slot in 0..count {
                let player = PlayerGenerator::generate(position, slot < starter_count, rng);
                // Capacity cannot be hit: the template is 18 players.
                let _ = team.register_player(player);
            }
        }

        let lineup = Self::pick_lineup(&team);
        debug!("generated team {} with {} players", name, team.players.len());

        // The template guarantees enough players per position group.
        team.set_lineup(&lineup)
            .expect("squad template must yield a valid lineup");

        team
    }

    /// Best-rated players per position group, in template proportions.
    fn pick_lineup(team: &Team) -> Vec<u32> {
        let mut lineup = Vec::with_capacity(LINEUP_SIZE);

        for (position, _, starter_count) in SQUAD_TEMPLATE {
            let mut group: Vec<&Player> = team.players.by_position(position);
            group.sort_by(|a, b| {
                b.performance_rating()
                    .partial_cmp(&a.performance_rating())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            lineup.extend(group.iter().take(starter_count).map(|p| p.id));
        }

        lineup
    }

    /// Generate a free-agent pool with `per_position` players of each
    /// position, available for transfer signings.
    pub fn generate_transfer_market(per_position: usize, rng: &mut impl Rng) -> Vec<Player> {
        let mut pool = Vec::with_capacity(per_position * PlayerPosition::ALL.len());

        for position in PlayerPosition::ALL {
            for _ in 0..per_position {
                pool.push(PlayerGenerator::generate(position, false, rng));
            }
        }

        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_teams_are_match_ready() {
        let mut rng = StdRng::seed_from_u64(3);
        let team = TeamGenerator::generate(1, "United FC", 5_000_000, &mut rng);

        assert_eq!(team.players.len(), 18);
        assert!(team.lineup_is_set());
        assert_eq!(team.budget, 5_000_000);
        assert!(team.team_strength() > 0.0);

        let starters = team.lineup_players();
        let keepers = starters
            .iter()
            .filter(|p| p.position == PlayerPosition::Goalkeeper)
            .count();
        assert_eq!(keepers, 1);

        let forwards = starters
            .iter()
            .filter(|p| p.position == PlayerPosition::Forward)
            .count();
        assert_eq!(forwards, 2);
    }

    #[test]
    fn transfer_market_covers_every_position() {
        let mut rng = StdRng::seed_from_u64(4);
        let pool = TeamGenerator::generate_transfer_market(3, &mut rng);

        assert_eq!(pool.len(), 12);
        for position in PlayerPosition::ALL {
            assert_eq!(pool.iter().filter(|p| p.position == position).count(), 3);
        }
    }
}
