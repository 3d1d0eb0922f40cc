//! Headless rollout runner (default binary).
//!
//! Drives the engine with a seeded random command stream - no rendering or
//! input layer, just the state machine - and prints a JSON summary of the
//! run. Useful for smoke-testing the engine and generating reference runs:
//!
//! ```text
//! tetrohash [seed] [max-ticks] [normal|puzzle|lightning]
//! ```

use anyhow::{anyhow, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use tetrohash::core::GridEngine;
use tetrohash::types::{GameCommand, GameMode};

const TICK_MS: u32 = 16;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 1,
    };
    let max_ticks: u32 = match args.next() {
        Some(s) => s.parse()?,
        None => 10_000,
    };
    let mode = match args.next() {
        Some(s) => GameMode::from_str(&s).ok_or_else(|| anyhow!("unknown mode: {s}"))?,
        None => GameMode::Normal,
    };

    let mut engine = GridEngine::new(seed);
    engine.start(mode);

    // Separate stream for player commands so the piece sequence stays
    // comparable across command mixes.
    let mut commands = SmallRng::seed_from_u64(seed ^ 0x9e37_79b9);
    let mut events = Vec::new();
    let mut ticks = 0u32;

    while !engine.game_over() && ticks < max_ticks {
        match commands.gen_range(0..10u8) {
            0 | 1 => engine.apply(GameCommand::MoveLeft),
            2 | 3 => engine.apply(GameCommand::MoveRight),
            4 => engine.apply(GameCommand::Rotate),
            5 => engine.apply(GameCommand::SoftDrop),
            6 => engine.apply(GameCommand::HardDrop),
            7 if mode.has_puzzle() => {
                let _ = engine.check_solution();
            }
            _ => {}
        }
        engine.apply(GameCommand::Tick(TICK_MS));
        events.extend(engine.take_events());
        ticks += 1;
    }

    let snapshot = engine.snapshot();
    let summary = json!({
        "seed": seed,
        "mode": snapshot.mode,
        "ticks": ticks,
        "score": snapshot.score,
        "lines": snapshot.lines,
        "level": snapshot.level,
        "game_over": snapshot.game_over,
        "wallet_balance": snapshot.wallet_balance,
        "events": events,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
