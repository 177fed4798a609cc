use fm_core::league::League;
use fm_core::shared::format_currency;
use fm_core::utils::TimeEstimation;
use fm_core::SeasonSimulator;
use fm_database::{save_game, SaveGame, TeamGenerator};
use log::{info, warn, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

const INITIAL_BUDGET: i64 = 5_000_000;

const TEAM_NAMES: [&str; 8] = [
    "Red Star United",
    "Harbour City",
    "Northbridge Rovers",
    "Kingsway Athletic",
    "Ironfield Town",
    "Silverton Wanderers",
    "Eastvale Albion",
    "Westgate County",
];

const SAVE_FILE: &str = "football_manager_save.json";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let seed: u64 = std::env::var("SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(2025);

    info!("starting season simulation with seed {}", seed);

    let mut rng = StdRng::seed_from_u64(seed);

    let mut league = League::new(String::from("Premier League"));
    for (idx, name) in TEAM_NAMES.iter().enumerate() {
        let team = TeamGenerator::generate(idx as u32 + 1, name, INITIAL_BUDGET, &mut rng);
        league.add_team(team)?;
    }

    league.generate_fixtures();

    let mut simulator = SeasonSimulator::new(league, seed);

    let (season, elapsed) = TimeEstimation::estimate(|| simulator.run_season());
    let weeks = season?;

    info!("season simulated in {} ms", elapsed);

    for week in &weeks {
        for result in &week.match_results {
            info!("week {}: {}", week.week, result.summary());
        }
        for injury in &week.injuries {
            info!(
                "week {}: {} out for {} weeks",
                week.week, injury.player_name, injury.weeks
            );
        }
        for &team_id in &week.wage_failures {
            if let Some(team) = simulator.league.team(team_id) {
                warn!("week {}: {} missed their wage bill", week.week, team.name);
            }
        }
    }

    println!("\n{}", simulator.league.standings());

    println!("Top scorers:");
    for row in simulator.league.top_scorers(5) {
        println!(
            "  {:<24} {:<20} {:>2} goals in {} matches",
            row.player_name, row.team_name, row.goals, row.played
        );
    }

    println!("\nTop assists:");
    for row in simulator.league.top_assists(5) {
        println!(
            "  {:<24} {:<20} {:>2} assists in {} matches",
            row.player_name, row.team_name, row.assists, row.played
        );
    }

    if let Some(champion) = simulator.league.standings().leader() {
        println!(
            "\nChampions: {} with {} points and {} in the bank",
            champion.team_name,
            champion.points,
            format_currency(champion.budget)
        );
    }

    let week = simulator.context.week;
    save_game(SAVE_FILE, &SaveGame::new(simulator.league, week))?;
    println!("\nSeason saved to {}", SAVE_FILE);

    Ok(())
}
