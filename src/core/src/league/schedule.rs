use serde::{Deserialize, Serialize};

/// Placeholder opponent id used by the round-robin rotation when the team
/// count is odd. Pairings against it are byes and produce no fixture.
const BYE: u32 = u32::MAX;

/// One scheduled pairing. `score` is filled in once the fixture is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team_id: u32,
    pub away_team_id: u32,
    /// 1-based round number.
    pub round: u16,
    pub played: bool,
    pub score: Option<(u8, u8)>,
}

/// A full double round-robin season schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub fixtures: Vec<Fixture>,
    pub rounds: u16,
}

impl Schedule {
    /// Build a double round-robin schedule with the circle method: every
    /// ordered pair of teams meets exactly once, each team plays at most
    /// one match per round.
    pub fn double_round_robin(team_ids: &[u32]) -> Self {
        if team_ids.len() < 2 {
            return Schedule::default();
        }

        let mut rotation: Vec<u32> = team_ids.to_vec();
        if rotation.len() % 2 != 0 {
            rotation.push(BYE);
        }

        let slots = rotation.len();
        let half_rounds = (slots - 1) as u16;
        let mut fixtures = Vec::new();

        for round in 0..half_rounds {
            for pair in 0..slots / 2 {
                let first = rotation[pair];
                let second = rotation[slots - 1 - pair];

                if first == BYE || second == BYE {
                    continue;
                }

                // Alternate home rights per round so neither side hosts
                // the whole first half.
                let (home, away) = if round % 2 == 0 {
                    (first, second)
                } else {
                    (second, first)
                };

                fixtures.push(Fixture {
                    home_team_id: home,
                    away_team_id: away,
                    round: round + 1,
                    played: false,
                    score: None,
                });
            }

            // Rotate all slots except the first.
            rotation[1..].rotate_right(1);
        }

        // Second half mirrors the first with home rights swapped.
        let mirrored: Vec<Fixture> = fixtures
            .iter()
            .map(|f| Fixture {
                home_team_id: f.away_team_id,
                away_team_id: f.home_team_id,
                round: f.round + half_rounds,
                played: false,
                score: None,
            })
            .collect();

        fixtures.extend(mirrored);

        Schedule {
            fixtures,
            rounds: half_rounds * 2,
        }
    }

    pub fn fixtures_for_round(&self, round: u16) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |f| f.round == round)
    }

    pub fn is_complete(&self) -> bool {
        !self.fixtures.is_empty() && self.fixtures.iter().all(|f| f.played)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}
