//! Board module - the fixed 10x20 grid
//!
//! Flat array storage for cache locality and zero allocation in the hot
//! paths. Coordinates: (x, y) where x ranges 0..9 (left to right) and y
//! ranges 0..19 (top to bottom). Rows above the visible board (y < 0) are
//! never considered occupied, which lets pieces spawn or rotate partially
//! off the top.

use arrayvec::ArrayVec;

use tetrohash_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_COLS: usize = BOARD_WIDTH as usize;
const BOARD_ROWS: usize = BOARD_HEIGHT as usize;
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a fill marker. y < 0 is never occupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Per-cell collision rule: outside the playfield horizontally, at or
    /// below the floor, or overlapping an occupied cell. A cell at y < 0
    /// within horizontal bounds is open regardless of board contents.
    pub fn cell_blocked(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        let start = y * BOARD_COLS;
        let end = start + BOARD_COLS;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row in one pass, inserting that many empty rows at
    /// the top and preserving the relative order of the remaining rows.
    /// Returns the cleared row indices in bottom-to-top scan order.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, BOARD_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = BOARD_ROWS;

        // Two-pointer sweep from the bottom: survivors slide down, full
        // rows are recorded and skipped.
        for read_y in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * BOARD_COLS;
                    let dst_start = write_y * BOARD_COLS;
                    self.cells
                        .copy_within(src_start..src_start + BOARD_COLS, dst_start);
                }
            }
        }

        // Blank the rows that opened up at the top.
        for cell in &mut self.cells[..write_y * BOARD_COLS] {
            *cell = None;
        }

        cleared_rows
    }

    /// Merge a piece's cells into the board, writing the kind's fill marker.
    /// Cells above the top row are clipped rather than rejected.
    pub fn merge(&mut self, cells: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) {
        for &(dx, dy) in cells {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write the grid as u8 cell codes (0 = empty, 1..=7 = kind code).
    pub fn to_u8_grid(&self) -> [[u8; BOARD_COLS]; BOARD_ROWS] {
        let mut out = [[0u8; BOARD_COLS]; BOARD_ROWS];
        for y in 0..BOARD_ROWS {
            for x in 0..BOARD_COLS {
                out[y][x] = self.cells[y * BOARD_COLS + x].map_or(0, PieceKind::code);
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
