//! Board tests - grid bounds, collision rule, and the line sweep

use tetrohash::core::Board;
use tetrohash::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.is_occupied(x, y));
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_cell_blocked_horizontal_and_floor() {
    let board = Board::new();

    for y in -4..BOARD_HEIGHT as i8 {
        assert!(board.cell_blocked(-1, y));
        assert!(board.cell_blocked(BOARD_WIDTH as i8, y));
    }
    for x in 0..BOARD_WIDTH as i8 {
        assert!(board.cell_blocked(x, BOARD_HEIGHT as i8));
        assert!(board.cell_blocked(x, BOARD_HEIGHT as i8 + 5));
    }
}

#[test]
fn test_cell_blocked_vanish_zone_always_open() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 0, Some(PieceKind::Z));
    }

    // Occupied top row blocks, but rows above it never do.
    assert!(board.cell_blocked(3, 0));
    assert!(!board.cell_blocked(3, -1));
    assert!(!board.cell_blocked(3, -4));
}

#[test]
fn test_cell_blocked_by_occupancy() {
    let mut board = Board::new();
    board.set(4, 10, Some(PieceKind::L));

    assert!(board.cell_blocked(4, 10));
    assert!(!board.cell_blocked(4, 9));
    assert!(!board.cell_blocked(3, 10));
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 19, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(19));

    board.set(BOARD_WIDTH as i8 - 1, 19, Some(PieceKind::I));
    assert!(board.is_row_full(19));
}

#[test]
fn test_clear_full_rows_counts_and_board_height() {
    let mut board = Board::new();
    for y in [19, 18, 15] {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::S));
        }
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 3);

    // The board keeps its dimensions and ends up empty.
    assert_eq!(board.cells().len(), (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize));
    assert!(board.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_clear_keeps_survivors_in_order() {
    let mut board = Board::new();

    // Bottom-up: full, marker A, full, marker B.
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, Some(PieceKind::I));
        board.set(x, 17, Some(PieceKind::I));
    }
    board.set(2, 18, Some(PieceKind::J));
    board.set(7, 16, Some(PieceKind::L));

    board.clear_full_rows();

    // B stays above A.
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(7, 18), Some(Some(PieceKind::L)));
    assert!(!board.is_occupied(2, 17));
}

#[test]
fn test_merge_writes_fill_markers() {
    let mut board = Board::new();
    board.merge(&[(0, 0), (0, 1), (1, 0), (1, 1)], 4, 18, PieceKind::O);

    assert_eq!(board.get(4, 18), Some(Some(PieceKind::O)));
    assert_eq!(board.get(5, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
}

#[test]
fn test_to_u8_grid_codes() {
    let mut board = Board::new();
    board.set(0, 0, Some(PieceKind::I));
    board.set(9, 19, Some(PieceKind::Z));

    let grid = board.to_u8_grid();
    assert_eq!(grid[0][0], PieceKind::I.code());
    assert_eq!(grid[19][9], PieceKind::Z.code());
    assert_eq!(grid[5][5], 0);
}
