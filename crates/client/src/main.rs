//! Battle client binary.
//!
//! Composition root that assembles:
//! 1. Configuration from the environment (`.env` is loaded first)
//! 2. Logging (stderr, plus a file when `LOG_DIR` is set)
//! 3. Templates: built-in tables overlaid with `CONTENT_DIR`
//! 4. A scripted session whose battle log is printed to stdout
//!
//! ```bash
//! BATTLE_MONSTERS=slime,goblin,goblin AUTO_ALLOCATE=str cargo run -p battle-client
//! ```

use anyhow::{Context, Result};
use battle_client::{ClientConfig, logging, run_session};
use game_content::{ContentFactory, builtin_snapshot};
use game_core::{AttributeKind, BattleOutcome, DerivedStatKind};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting battle session: seed={}", config.seed);

    let templates = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir).load_snapshot()?,
        None => builtin_snapshot(),
    };

    let report = run_session(&config, &templates)?;

    for (index, encounter) in report.encounters.iter().enumerate() {
        println!("=== Battle {}: {} ===", index + 1, encounter.monster_id);
        for event in &encounter.events {
            println!("  {}", event);
        }
        if encounter.outcome.is_none() {
            println!("  (stopped after {} rounds)", encounter.rounds);
        }
    }

    let summary = report.player.stats().summary();
    println!();
    println!(
        "{} the {} - Lv.{} (EXP {}/{})",
        report.player.name(),
        summary.template.id(),
        summary.level,
        report.player.stats().current_experience(),
        report.player.stats().required_experience()
    );
    for kind in AttributeKind::ALL {
        print!("{} {}  ", kind.label(), summary.primary.get(kind));
    }
    println!();
    for kind in DerivedStatKind::ALL {
        print!("{} {}{}  ", kind.name(), kind.get(&summary.derived), kind.suffix());
    }
    println!();
    println!(
        "Victories {} / Defeats {} / Escapes {}",
        report.count(BattleOutcome::Victory),
        report.count(BattleOutcome::Defeat),
        report.count(BattleOutcome::Fled)
    );

    let saved = serde_json::to_string_pretty(&report.final_character())
        .context("Failed to serialize character")?;
    println!("{}", saved);

    Ok(())
}
