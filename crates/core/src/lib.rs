//! TetroHash core - pure, deterministic game logic
//!
//! This crate contains the whole grid engine: board rules, piece templates,
//! gravity/scoring progression, and the hash-preimage puzzle. It has zero
//! dependencies on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical games
//! - **Testable**: every rule is exercisable without a frontend
//! - **Portable**: runs headless, in a terminal, or behind a web view
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with the collision rule and the line sweep
//! - [`pieces`]: the seven piece templates and the kickless rotation
//! - [`engine`]: [`GridEngine`] - the command-driven state machine
//! - [`puzzle`]: digest schemes and the preimage-matching minigame
//! - [`rng`]: seeded uniform piece sampling (no bag randomizer)
//! - [`events`]: drained side-channel events for collaborators
//! - [`snapshot`]: the read-only state export
//!
//! # Example
//!
//! ```
//! use tetrohash_core::GridEngine;
//! use tetrohash_types::{GameCommand, GameMode};
//!
//! let mut engine = GridEngine::new(12345);
//! engine.start(GameMode::Normal);
//!
//! engine.apply(GameCommand::MoveLeft);
//! engine.apply(GameCommand::Rotate);
//! engine.apply(GameCommand::HardDrop);
//!
//! assert!(!engine.game_over());
//! let snapshot = engine.snapshot();
//! assert!(snapshot.next.is_some());
//! ```
//!
//! # Timing
//!
//! The engine has no internal timers: feed it `GameCommand::Tick(delta_ms)`
//! at whatever cadence the frontend runs. Gravity advances one row each
//! time the accumulated delta reaches the current drop interval (500 ms at
//! level 1, 50 ms faster per level, floored at 50 ms).

pub mod board;
pub mod engine;
pub mod events;
pub mod pieces;
pub mod puzzle;
pub mod rng;
pub mod snapshot;

pub use tetrohash_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{GridEngine, Tetromino};
pub use events::GameEvent;
pub use puzzle::{DigestScheme, PuzzleOutcome, PuzzleState};
pub use rng::PieceSampler;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
