//! Shared types for the TetroHash engine.
//!
//! Pure data types and tuning constants with no game logic. Everything here
//! is consumed by the core engine and by whatever composes it (renderer,
//! input adapter, persistence) - so the enums carry serde derives.

use serde::{Deserialize, Serialize};

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing (milliseconds). The drop interval starts at the base
/// value and loses one step per level, never going below the floor.
pub const BASE_DROP_MS: u32 = 500;
pub const DROP_STEP_MS: u32 = 50;
pub const DROP_FLOOR_MS: u32 = 50;

/// Scoring: a clear of k lines is worth `k * LINE_SCORE_BASE * level`,
/// and the level advances every `LINES_PER_LEVEL` cumulative lines.
pub const LINE_SCORE_BASE: u32 = 100;
pub const LINES_PER_LEVEL: u32 = 10;

/// Sats credited to the wallet per cleared line, scaled by level.
pub const LINE_CLEAR_SAT_RATE: u32 = 10;

/// Puzzle reward bounds (sats), plus a flat bonus per character of the
/// target digest.
pub const REWARD_MIN_SATS: u32 = 250;
pub const REWARD_MAX_SATS: u32 = 1000;
pub const REWARD_DIGEST_BONUS: u32 = 2;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All seven kinds, in canonical table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Index into [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Stable non-zero cell code for the snapshot grid (0 means empty).
    pub fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[code as usize - 1]),
            _ => None,
        }
    }
}

/// Game modes. Puzzle and Lightning both carry the hash puzzle; Lightning
/// additionally routes rewards to an external payout layer, which is not
/// the engine's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Normal,
    Puzzle,
    Lightning,
}

impl GameMode {
    pub fn has_puzzle(&self) -> bool {
        matches!(self, GameMode::Puzzle | GameMode::Lightning)
    }

    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(GameMode::Normal),
            "puzzle" => Some(GameMode::Puzzle),
            "lightning" => Some(GameMode::Lightning),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::Puzzle => "puzzle",
            GameMode::Lightning => "lightning",
        }
    }
}

/// Discrete engine commands. `Tick` carries elapsed milliseconds and is the
/// only way the engine experiences time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Tick(u32),
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
