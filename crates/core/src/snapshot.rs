//! Read-only state snapshot consumed by rendering and persistence layers.

use serde::Serialize;

use tetrohash_types::{GameMode, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::engine::Tetromino;
use crate::pieces::PieceShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Current cell offsets (possibly rotated)
    pub cells: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl From<&Tetromino> for ActiveSnapshot {
    fn from(value: &Tetromino) -> Self {
        Self {
            kind: value.kind,
            cells: value.cells,
            x: value.x,
            y: value.y,
        }
    }
}

/// Complete observable state. The board is exported as u8 cell codes
/// (0 = empty, 1..=7 = [`PieceKind::code`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub game_over: bool,
    pub mode: GameMode,
    pub puzzle_active: bool,
    pub target_digest: Option<String>,
    pub wallet_balance: u64,
}
