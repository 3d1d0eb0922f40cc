//! Side-channel events emitted by the engine.
//!
//! Collaborators (audio, reward animation, persistence) subscribe by
//! draining [`GridEngine::take_events`](crate::engine::GridEngine::take_events)
//! after each command instead of the engine touching presentation directly.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    LinesCleared { count: u32 },
    LevelUp { level: u32 },
    GameOver,
    PuzzleSolved { reward: u32 },
}
