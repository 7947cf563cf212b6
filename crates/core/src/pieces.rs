//! Pieces module - tetrimino orientation tables and rotation
//!
//! Each type has a fixed, ordered list of orientations (the O piece has a
//! single one that every rotation reuses). Rotation is a plain modular step
//! through that list; there is no kick search. A caller that finds the new
//! orientation blocked rotates back the other way.

use crate::shape::Shape;
use crate::types::{PieceKind, Rgba};

static I_SHAPES: [Shape; 4] = [
    Shape::from_rows(&["0000", "1111", "0000", "0000"]),
    Shape::from_rows(&["0010", "0010", "0010", "0010"]),
    Shape::from_rows(&["0000", "0000", "1111", "0000"]),
    Shape::from_rows(&["0100", "0100", "0100", "0100"]),
];

static O_SHAPES: [Shape; 1] = [Shape::from_rows(&["11", "11"])];

static T_SHAPES: [Shape; 4] = [
    Shape::from_rows(&["010", "111", "000"]),
    Shape::from_rows(&["010", "011", "010"]),
    Shape::from_rows(&["000", "111", "010"]),
    Shape::from_rows(&["010", "110", "010"]),
];

static J_SHAPES: [Shape; 4] = [
    Shape::from_rows(&["100", "111", "000"]),
    Shape::from_rows(&["011", "010", "010"]),
    Shape::from_rows(&["000", "111", "001"]),
    Shape::from_rows(&["010", "010", "110"]),
];

static L_SHAPES: [Shape; 4] = [
    Shape::from_rows(&["001", "111", "000"]),
    Shape::from_rows(&["010", "010", "011"]),
    Shape::from_rows(&["000", "111", "100"]),
    Shape::from_rows(&["110", "010", "010"]),
];

static S_SHAPES: [Shape; 4] = [
    Shape::from_rows(&["011", "110", "000"]),
    Shape::from_rows(&["010", "011", "001"]),
    Shape::from_rows(&["000", "011", "110"]),
    Shape::from_rows(&["100", "110", "010"]),
];

static Z_SHAPES: [Shape; 4] = [
    Shape::from_rows(&["110", "011", "000"]),
    Shape::from_rows(&["001", "011", "010"]),
    Shape::from_rows(&["000", "110", "011"]),
    Shape::from_rows(&["010", "110", "100"]),
];

/// Get the orientation table for a piece kind
pub fn orientations(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
    }
}

/// Get one orientation of a piece kind, wrapping the index
pub fn get_shape(kind: PieceKind, orientation: usize) -> &'static Shape {
    let table = orientations(kind);
    &table[orientation % table.len()]
}

/// A tetrimino: type, color and current orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    orientation: usize,
}

impl Piece {
    /// Create a piece in its first orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            orientation: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Rgba {
        self.kind.color()
    }

    /// Index of the current orientation
    pub fn orientation(&self) -> usize {
        self.orientation
    }

    /// Number of orientations this piece cycles through
    pub fn orientation_count(&self) -> usize {
        orientations(self.kind).len()
    }

    /// Mask of the current orientation
    pub fn current_shape(&self) -> &'static Shape {
        get_shape(self.kind, self.orientation)
    }

    /// Step to the next orientation, wrapping around
    pub fn rotate_left(&mut self) {
        self.orientation = (self.orientation + 1) % self.orientation_count();
    }

    /// Step to the previous orientation, wrapping around
    pub fn rotate_right(&mut self) {
        let count = self.orientation_count();
        self.orientation = (self.orientation + count - 1) % count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_piece_has_four_cells_in_every_orientation() {
        for kind in PieceKind::ALL {
            for shape in orientations(kind) {
                assert_eq!(shape.cell_count(), 4, "{:?}", kind);
            }
        }
    }

    #[test]
    fn o_piece_has_single_orientation() {
        let mut o = Piece::new(PieceKind::O);
        assert_eq!(o.orientation_count(), 1);
        o.rotate_left();
        assert_eq!(o.orientation(), 0);
        o.rotate_right();
        assert_eq!(o.orientation(), 0);
    }

    #[test]
    fn rotation_wraps_both_ways() {
        let mut t = Piece::new(PieceKind::T);
        t.rotate_right();
        assert_eq!(t.orientation(), 3);
        t.rotate_left();
        assert_eq!(t.orientation(), 0);
        for _ in 0..4 {
            t.rotate_left();
        }
        assert_eq!(t.orientation(), 0);
    }

    #[test]
    fn get_shape_wraps_index() {
        assert_eq!(get_shape(PieceKind::S, 5), &S_SHAPES[1]);
        assert_eq!(get_shape(PieceKind::O, 3), &O_SHAPES[0]);
    }
}
