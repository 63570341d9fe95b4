use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use team_registry::{RegistryError, TeamRegistry};
use tracing::{info, Level};

fn date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).context("invalid calendar date")
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Testing TeamRegistry...");

    let mut registry = TeamRegistry::new();

    // Test 1: Register teams and players
    println!("Test 1: Registering teams and players...");
    registry.register_team(
        Some(1),
        "Crimson FC".to_string(),
        date(2020, 1, 1)?,
        "red".to_string(),
        "white".to_string(),
    )?;
    registry.register_team(
        Some(2),
        "Harbor United".to_string(),
        date(2018, 7, 15)?,
        "Red".to_string(),
        "blue".to_string(),
    )?;

    registry.register_player(
        10,
        1,
        "Alves".to_string(),
        date(1990, 1, 1)?,
        80,
        dec!(1000),
    )?;
    registry.register_player(
        11,
        1,
        "Costa".to_string(),
        date(1985, 3, 12)?,
        80,
        dec!(1500.50),
    )?;
    registry.register_player(
        20,
        2,
        "Moreira".to_string(),
        date(1998, 11, 30)?,
        95,
        dec!(7200),
    )?;
    println!(
        "Registered {} teams and {} players",
        registry.team_count(),
        registry.player_count()
    );

    // Test 2: Duplicate and missing-team registrations are rejected
    println!("\nTest 2: Rejecting invalid registrations...");
    match registry.register_player(10, 1, "Again".to_string(), date(1991, 2, 2)?, 50, dec!(10)) {
        Err(RegistryError::DuplicateIdentifier { id }) => {
            println!("Duplicate player id {id} rejected")
        }
        other => anyhow::bail!("expected DuplicateIdentifier, got {other:?}"),
    }
    match registry.register_player(30, 9, "Nobody".to_string(), date(1991, 2, 2)?, 50, dec!(10)) {
        Err(RegistryError::TeamNotFound { team_id }) => {
            println!("Unknown team id {team_id} rejected")
        }
        other => anyhow::bail!("expected TeamNotFound, got {other:?}"),
    }

    // Test 3: Captaincy
    println!("\nTest 3: Captain assignment...");
    match registry.captain_of(1) {
        Err(RegistryError::CaptainNotSet { team_id }) => {
            println!("Team {team_id} starts without a captain")
        }
        other => anyhow::bail!("expected CaptainNotSet, got {other:?}"),
    }
    registry.assign_captain(10)?;
    println!(
        "Captain of {}: {}",
        registry.team_name(1)?,
        registry.player_name(registry.captain_of(1)?)?
    );

    // Test 4: Ranking queries
    println!("\nTest 4: Ranking queries...");
    println!("Teams: {:?}", registry.all_team_ids());
    println!("Roster of team 1: {:?}", registry.players_of_team(1)?);
    println!("Best of team 1: {}", registry.best_player_of_team(1)?);
    println!("Oldest of team 1: {}", registry.oldest_player_of_team(1)?);
    println!("Highest paid of team 1: {}", registry.highest_paid_player_of_team(1)?);

    let top = registry.top_players(10);
    println!("\nTop {} players by skill:", top.len());
    println!("Rank Name                 Skill  Salary");
    println!("----------------------------------------");
    for (i, player_id) in top.iter().enumerate() {
        let player = registry.player(*player_id)?;
        println!(
            "{:4} {:20} {:5} {:9}",
            i + 1,
            player.name,
            player.skill_level,
            player.salary
        );
    }

    // Test 5: Kit colors
    println!("\nTest 5: Kit-color comparison...");
    // Primaries clash case-insensitively, so the away side wears its secondary.
    println!("Away kit for 2 at 1: {}", registry.away_kit_color(1, 2)?);
    println!("Away kit for 1 at 2: {}", registry.away_kit_color(2, 1)?);

    info!("TeamRegistry test completed successfully!");
    Ok(())
}
