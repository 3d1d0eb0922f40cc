//! Grid engine - the falling-block state machine
//!
//! Owns the board, active/next piece, score progression, and the puzzle
//! state. The engine is advanced exclusively by discrete commands plus
//! `tick(delta_ms)` from a single caller; it exposes a read-only snapshot
//! and a drained event list, and never renders, plays sound, or persists
//! anything itself.
//!
//! Lifecycle: Idle (constructed, no active piece) -> Running (`start`) ->
//! GameOver (a freshly spawned piece collides at its spawn position). Every
//! command except `start` is a silent no-op while Idle or GameOver.

use tetrohash_types::{
    GameCommand, GameMode, PieceKind, BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS,
    LINES_PER_LEVEL, LINE_CLEAR_SAT_RATE, LINE_SCORE_BASE,
};

use crate::board::Board;
use crate::events::GameEvent;
use crate::pieces::{self, rotated, PieceShape, SPAWN_X, SPAWN_Y};
use crate::puzzle::{self, DigestScheme, PuzzleOutcome, PuzzleState};
use crate::rng::PieceSampler;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

/// Active falling piece: template cells (possibly rotated) anchored at (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub cells: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            cells: pieces::template(kind).cells,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GridEngine {
    board: Board,
    active: Option<Tetromino>,
    next: Option<PieceKind>,
    sampler: PieceSampler,
    mode: GameMode,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    wallet_balance: u64,
    started: bool,
    game_over: bool,
    puzzle: PuzzleState,
    events: Vec<GameEvent>,
}

impl GridEngine {
    /// Create an idle engine with the given RNG seed, using SHA-256 for
    /// puzzle digests.
    pub fn new(seed: u64) -> Self {
        Self::with_digest_scheme(seed, DigestScheme::Sha256)
    }

    /// Create an idle engine with an explicit digest scheme (the fallback
    /// scheme keeps the puzzle working where no digest primitive exists).
    pub fn with_digest_scheme(seed: u64, scheme: DigestScheme) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            sampler: PieceSampler::new(seed),
            mode: GameMode::Normal,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            wallet_balance: 0,
            started: false,
            game_over: false,
            puzzle: PuzzleState::new(scheme),
            events: Vec::new(),
        }
    }

    /// Reset to a fresh game in the given mode and spawn the first piece.
    /// The wallet balance survives restarts.
    pub fn start(&mut self, mode: GameMode) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.mode = mode;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.started = true;
        self.game_over = false;
        self.events.clear();
        self.puzzle.clear();
        if mode.has_puzzle() {
            self.generate_puzzle();
        }
        self.spawn();
    }

    fn running(&self) -> bool {
        self.started && !self.game_over
    }

    /// Promote next to active (drawing one if none exists yet), refill the
    /// next slot, and test the spawn position. A colliding spawn ends the
    /// game without merging the piece into the board.
    pub(crate) fn spawn(&mut self) {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.sampler.draw(),
        };
        self.next = Some(self.sampler.draw());

        let piece = Tetromino::spawn(kind);
        // Shown overlapping by renderers, but never merged.
        self.active = Some(piece);
        if self.collision(piece.x, piece.y, &piece.cells) {
            self.game_over = true;
            self.events.push(GameEvent::GameOver);
        }
    }

    /// Pure collision predicate: true if any cell of `cells` anchored at
    /// (x, y) is blocked. The single source of truth for movement legality.
    pub fn collision(&self, x: i8, y: i8, cells: &PieceShape) -> bool {
        cells
            .iter()
            .any(|&(dx, dy)| self.board.cell_blocked(x + dx, y + dy))
    }

    /// Horizontal shift by dx; silently rejected when blocked.
    pub fn move_piece(&mut self, dx: i8) {
        if !self.running() {
            return;
        }
        let Some(active) = self.active else { return };
        if !self.collision(active.x + dx, active.y, &active.cells) {
            self.active = Some(Tetromino {
                x: active.x + dx,
                ..active
            });
        }
    }

    /// Rotate 90 degrees in place; no wall kicks, an illegal candidate is
    /// discarded and the shape stays byte-for-byte unchanged.
    pub fn rotate(&mut self) {
        if !self.running() {
            return;
        }
        let Some(active) = self.active else { return };
        let candidate = rotated(&active.cells);
        if !self.collision(active.x, active.y, &candidate) {
            self.active = Some(Tetromino {
                cells: candidate,
                ..active
            });
        }
    }

    /// Advance one row, or lock if the piece cannot descend.
    pub fn soft_drop(&mut self) {
        if !self.running() {
            return;
        }
        let Some(active) = self.active else { return };
        if !self.collision(active.x, active.y + 1, &active.cells) {
            self.active = Some(Tetromino {
                y: active.y + 1,
                ..active
            });
        } else {
            self.lock_and_advance();
        }
    }

    /// Drop to the final resting row and lock immediately. No per-cell drop
    /// bonus in this ruleset.
    pub fn hard_drop(&mut self) {
        if !self.running() {
            return;
        }
        let Some(mut active) = self.active else { return };
        while !self.collision(active.x, active.y + 1, &active.cells) {
            active.y += 1;
        }
        self.active = Some(active);
        self.lock_and_advance();
    }

    /// Accumulate elapsed time; at or past the drop interval, perform one
    /// gravity step and reset the accumulator (overshoot is discarded).
    pub fn tick(&mut self, delta_ms: u32) {
        if !self.running() {
            return;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(delta_ms);
        if self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms = 0;
            self.soft_drop();
        }
    }

    /// Lock sequence: merge, sweep full rows, score, spawn. Atomic with
    /// respect to external observation.
    fn lock_and_advance(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board
            .merge(&active.cells, active.x, active.y, active.kind);

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            self.apply_clear(cleared.len() as u32);
        }

        self.spawn();
    }

    /// Scoring for a clear of `count` rows. Points use the level in effect
    /// before the clear; the sat reward uses the recomputed level.
    fn apply_clear(&mut self, count: u32) {
        self.lines += count;
        self.score += count * LINE_SCORE_BASE * self.level;
        self.events.push(GameEvent::LinesCleared { count });

        let new_level = self.lines / LINES_PER_LEVEL + 1;
        if new_level > self.level {
            self.level = new_level;
            self.events.push(GameEvent::LevelUp { level: new_level });
        }
        self.drop_interval_ms =
            DROP_FLOOR_MS.max(BASE_DROP_MS.saturating_sub((self.level - 1) * DROP_STEP_MS));

        self.wallet_balance += u64::from(count * LINE_CLEAR_SAT_RATE * self.level);
    }

    /// Draw a fresh puzzle target. Returns the kind it targets.
    pub fn generate_puzzle(&mut self) -> PieceKind {
        self.puzzle.generate(&mut self.sampler)
    }

    /// Install a puzzle targeting a specific kind - the deterministic seam
    /// for composed apps (daily challenges, tutorials) and tests.
    pub fn set_puzzle_for(&mut self, kind: PieceKind) {
        self.puzzle.set_target(kind);
    }

    /// Compare the active piece's preimage digest against the target. A
    /// solve credits the wallet, deactivates the puzzle, and immediately
    /// generates a new one; a mismatch changes nothing.
    pub fn check_solution(&mut self) -> PuzzleOutcome {
        if !self.running() || !self.puzzle.active() {
            return PuzzleOutcome::NotApplicable;
        }
        let Some(active) = self.active else {
            return PuzzleOutcome::NotApplicable;
        };

        let preimage = pieces::template(active.kind).preimage;
        if !self.puzzle.matches(preimage) {
            return PuzzleOutcome::Mismatch { preimage };
        }

        let target_digest = self
            .puzzle
            .target_digest()
            .unwrap_or_default()
            .to_owned();
        let reward = puzzle::roll_reward(&mut self.sampler, target_digest.len());
        self.wallet_balance += u64::from(reward);
        self.events.push(GameEvent::PuzzleSolved { reward });

        self.puzzle.clear();
        self.generate_puzzle();

        PuzzleOutcome::Solved {
            reward,
            preimage,
            target_digest,
        }
    }

    /// Dispatch a discrete command.
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::MoveLeft => self.move_piece(-1),
            GameCommand::MoveRight => self.move_piece(1),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::Tick(delta_ms) => self.tick(delta_ms),
        }
    }

    /// Drain the pending event list.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_u8_grid(),
            active: self.active.as_ref().map(ActiveSnapshot::from),
            next: self.next,
            score: self.score,
            lines: self.lines,
            level: self.level,
            drop_interval_ms: self.drop_interval_ms,
            game_over: self.game_over,
            mode: self.mode,
            puzzle_active: self.puzzle.active(),
            target_digest: self.puzzle.target_digest().map(str::to_owned),
            wallet_balance: self.wallet_balance,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn wallet_balance(&self) -> u64 {
        self.wallet_balance
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn puzzle_active(&self) -> bool {
        self.puzzle.active()
    }

    pub fn target_digest(&self) -> Option<&str> {
        self.puzzle.target_digest()
    }

    pub fn seed(&self) -> u64 {
        self.sampler.seed()
    }
}
