//! Piece templates - the seven tetromino kinds
//!
//! One typed template table shared by the whole engine: four offset cells
//! per kind, a color token used as the board fill marker's display value,
//! and the preimage label consumed by the hash puzzle. Templates are
//! immutable; the engine copies the cells on spawn.
//!
//! Rotation is a plain 90-degree transform about the implicit origin with
//! no wall-kick compensation: a rotation that does not fit is rejected
//! outright. This is the observed contract of the ruleset, not a bug.

use tetrohash_types::{PieceKind, BOARD_WIDTH};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// Immutable per-kind template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceTemplate {
    pub kind: PieceKind,
    pub cells: PieceShape,
    pub color: &'static str,
    pub preimage: &'static str,
}

/// The seven templates, indexed by [`PieceKind::index`].
pub const TEMPLATES: [PieceTemplate; 7] = [
    PieceTemplate {
        kind: PieceKind::I,
        cells: [(0, 0), (0, 1), (0, 2), (0, 3)],
        color: "#ffd700",
        preimage: "TJLO",
    },
    PieceTemplate {
        kind: PieceKind::O,
        cells: [(0, 0), (0, 1), (1, 0), (1, 1)],
        color: "#ff6b35",
        preimage: "SQUARE",
    },
    PieceTemplate {
        kind: PieceKind::T,
        cells: [(0, 1), (1, 0), (1, 1), (1, 2)],
        color: "#28a745",
        preimage: "TEE",
    },
    PieceTemplate {
        kind: PieceKind::L,
        cells: [(0, 0), (1, 0), (2, 0), (2, 1)],
        color: "#dc3545",
        preimage: "ELL",
    },
    PieceTemplate {
        kind: PieceKind::J,
        cells: [(0, 1), (1, 1), (2, 0), (2, 1)],
        color: "#6f42c1",
        preimage: "JAY",
    },
    PieceTemplate {
        kind: PieceKind::S,
        cells: [(0, 1), (0, 2), (1, 0), (1, 1)],
        color: "#20c997",
        preimage: "ESS",
    },
    PieceTemplate {
        kind: PieceKind::Z,
        cells: [(0, 0), (0, 1), (1, 1), (1, 2)],
        color: "#fd7e14",
        preimage: "ZED",
    },
];

/// Look up the template for a kind
pub fn template(kind: PieceKind) -> &'static PieceTemplate {
    &TEMPLATES[kind.index()]
}

/// Rotate a shape 90 degrees: (dx, dy) -> (-dy, dx)
pub fn rotated(shape: &PieceShape) -> PieceShape {
    let mut out = *shape;
    for cell in &mut out {
        *cell = (-cell.1, cell.0);
    }
    out
}

/// Spawn anchor for new pieces: horizontally centered, top row.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;
pub const SPAWN_Y: i8 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_consistent() {
        for (i, tpl) in TEMPLATES.iter().enumerate() {
            assert_eq!(tpl.kind.index(), i);
            assert_eq!(template(tpl.kind).kind, tpl.kind);
            assert_eq!(tpl.cells.len(), 4);
            assert!(tpl.color.starts_with('#'));
            assert!(!tpl.preimage.is_empty());
        }
    }

    #[test]
    fn test_preimages_are_distinct() {
        for a in &TEMPLATES {
            for b in &TEMPLATES {
                if a.kind != b.kind {
                    assert_ne!(a.preimage, b.preimage);
                }
            }
        }
    }

    #[test]
    fn test_rotation_transform() {
        let t = template(PieceKind::T).cells;
        assert_eq!(rotated(&t), [(-1, 0), (0, 1), (-1, 1), (-2, 1)]);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for tpl in &TEMPLATES {
            let mut shape = tpl.cells;
            for _ in 0..4 {
                shape = rotated(&shape);
            }
            assert_eq!(shape, tpl.cells, "kind {:?}", tpl.kind);
        }
    }

    #[test]
    fn test_spawn_anchor() {
        assert_eq!(SPAWN_X, 4);
        assert_eq!(SPAWN_Y, 0);
    }
}
