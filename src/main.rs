//! Robot Odyssey headless runner
//!
//! Plays a session in autopilot mode and prints the final snapshot as JSON.
//! Windowing and input live in the platform layer; this binary exists to
//! exercise the simulation from the command line.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use robot_odyssey::sim::{GameEvent, GameSession, TickInput, tick};
use robot_odyssey::{DifficultyPreset, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "robot-odyssey")]
#[command(about = "Run a headless Robot Odyssey session on autopilot")]
struct Cli {
    /// JSON config file (tick_rate, speed_multiplier, difficulty)
    config: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Difficulty preset (easy, normal, hard); overrides the config file
    #[arg(long, value_parser = parse_preset)]
    difficulty: Option<DifficultyPreset>,
}

fn parse_preset(s: &str) -> Result<DifficultyPreset, String> {
    DifficultyPreset::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Robot Odyssey (headless) starting...");

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            log::info!("Loaded config from {}", path.display());
            GameConfig::from_json(&json)?
        }
        None => GameConfig::default(),
    };
    if let Some(preset) = cli.difficulty {
        log::info!("Difficulty preset: {}", preset.as_str());
        config.difficulty = preset.level();
    }

    let mut session = GameSession::new(&config, cli.seed);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let report_every = u64::from(session.config().tick_rate);

    let mut snapshot = session.snapshot();
    let (mut collected, mut hits, mut respawns) = (0u32, 0u32, 0u32);
    for _ in 0..cli.ticks {
        snapshot = tick(&mut session, &input);
        for event in &snapshot.events {
            match event {
                GameEvent::RewardCollected => collected += 1,
                GameEvent::PlayerHit => hits += 1,
                GameEvent::RewardsRespawned => respawns += 1,
                GameEvent::AdversaryEscalated => {
                    log::info!("Monster sped up to {:?}", session.adversary().velocity())
                }
                GameEvent::MarkerTouched(_) => {}
            }
        }
        if snapshot.tick % report_every == 0 {
            log::info!("{}", snapshot.dashboard_text());
        }
    }

    log::info!(
        "Finished {} ticks: {} coins, {} hits, {} coin waves",
        snapshot.tick,
        collected,
        hits,
        respawns
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
