//! Playfield tests - collision, locking and row clearing

use marathon::core::{LinesCleared, Piece, Playfield};
use marathon::types::{Cell, PieceKind, Rgba, COLUMNS, HIGHLIGHT_TIME, LINES};

/// Deterministic scatter of occupied cells.
fn scattered_field() -> Playfield {
    let mut field = Playfield::new();
    for y in 0..LINES as i32 {
        for x in 0..COLUMNS as i32 {
            if (x * 7 + y * 3) % 5 == 0 {
                field.set(x, y, Cell::filled(Rgba::GREEN));
            }
        }
    }
    field
}

fn fill_row(field: &mut Playfield, y: usize) {
    for x in 0..COLUMNS as i32 {
        field.set(x, y as i32, Cell::filled(Rgba::CYAN));
    }
}

/// One cell per row, positioned and colored by the row index.
fn marker(y: usize) -> (i32, Cell) {
    ((y % COLUMNS) as i32, Cell::filled(Rgba::rgb(y as u8 * 10, 100, 200)))
}

fn lock(field: &mut Playfield, kind: PieceKind, left: i32, top: i32) {
    let piece = Piece::new(kind);
    assert!(field.does_shape_fit_here(&piece, left, top));
    assert!(field.lock_in_place(&piece, left, top));
}

#[test]
fn test_collision_soundness_exhaustive() {
    let field = scattered_field();

    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        for _ in 0..piece.orientation_count() {
            for top in -6..LINES as i32 + 2 {
                for left in -5..COLUMNS as i32 + 2 {
                    let expected = piece.current_shape().filled_cells().all(|(dx, dy)| {
                        let (x, y) = (left + dx, top + dy);
                        if x < 0 || x >= COLUMNS as i32 || y >= LINES as i32 {
                            false
                        } else if y < 0 {
                            true
                        } else {
                            !field.is_occupied(x, y)
                        }
                    });
                    assert_eq!(
                        field.does_shape_fit_here(&piece, left, top),
                        expected,
                        "{:?} orientation {} at ({}, {})",
                        kind,
                        piece.orientation(),
                        left,
                        top
                    );
                }
            }
            piece.rotate_left();
        }
    }
}

#[test]
fn test_rows_above_grid_never_collide() {
    let mut field = Playfield::new();
    fill_row(&mut field, 0);

    let mut i = Piece::new(PieceKind::I);
    i.rotate_left();
    // Vertical I in mask column 2, entirely above the grid.
    assert!(field.does_shape_fit_here(&i, 0, -4));
    // One cell reaches row 0.
    assert!(!field.does_shape_fit_here(&i, 0, -3));
}

#[test]
fn test_lock_writes_only_piece_cells() {
    let mut field = scattered_field();
    let before = field.clone();

    let mut piece = Piece::new(PieceKind::S);
    piece.rotate_left();
    let (left, top) = (1, 13);
    assert!(field.does_shape_fit_here(&piece, left, top));
    assert!(field.lock_in_place(&piece, left, top));

    let covered: Vec<(i32, i32)> = piece
        .current_shape()
        .filled_cells()
        .map(|(dx, dy)| (left + dx, top + dy))
        .collect();

    for y in 0..LINES as i32 {
        for x in 0..COLUMNS as i32 {
            if covered.contains(&(x, y)) {
                assert_eq!(field.get(x, y), Some(Cell::filled(Rgba::GREEN)));
            } else {
                assert_eq!(field.get(x, y), before.get(x, y), "cell ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_lock_above_grid_reports_top_out() {
    let mut field = Playfield::new();
    let piece = Piece::new(PieceKind::O);

    assert!(!field.lock_in_place(&piece, 4, -1));
    assert!(!field.lock_in_place(&piece, 4, -2));
    assert_eq!(field, Playfield::new());
}

#[test]
fn test_jlo_row_clear() {
    let mut field = Playfield::new();

    lock(&mut field, PieceKind::O, 0, 18);
    lock(&mut field, PieceKind::O, 2, 18);
    lock(&mut field, PieceKind::J, 4, 18);
    lock(&mut field, PieceKind::L, 7, 18);

    assert_eq!(field.validate_field(), 1);
    assert_eq!(field.completed_lines(), &[19]);
    assert!(field.is_clearing());

    // Highlight holds the rows in place.
    assert_eq!(field.update(HIGHLIGHT_TIME / 2.0), None);
    assert!(field.is_row_full(19));

    assert_eq!(
        field.update(HIGHLIGHT_TIME / 2.0),
        Some(LinesCleared { count: 1 })
    );

    // Row 18 moved down intact.
    let expected = [
        Some(Rgba::YELLOW),
        Some(Rgba::YELLOW),
        Some(Rgba::YELLOW),
        Some(Rgba::YELLOW),
        Some(Rgba::BLUE),
        None,
        None,
        None,
        None,
        Some(Rgba::ORANGE),
    ];
    for (x, color) in expected.iter().enumerate() {
        let cell = field.get(x as i32, 19);
        match color {
            Some(c) => assert_eq!(cell, Some(Cell::filled(*c)), "column {}", x),
            None => assert!(!field.is_occupied(x as i32, 19), "column {}", x),
        }
    }

    assert!((0..COLUMNS as i32).all(|x| !field.is_occupied(x, 18)));
    assert!(field.row(0).iter().all(|c| *c == Cell::CLEARED));
    assert!(field.row(1).iter().all(|c| *c == Cell::EMPTY));
}

fn check_multi_row_clear(full_rows: &[usize]) {
    let mut field = Playfield::new();
    for y in 0..LINES {
        if full_rows.contains(&y) {
            fill_row(&mut field, y);
        } else {
            let (x, cell) = marker(y);
            field.set(x, y as i32, cell);
        }
    }

    assert_eq!(field.validate_field(), full_rows.len());
    assert_eq!(field.completed_lines(), full_rows);
    assert_eq!(
        field.update(HIGHLIGHT_TIME),
        Some(LinesCleared {
            count: full_rows.len() as u32
        })
    );

    let n = full_rows.len();
    for y in 0..n {
        assert!(
            field.row(y).iter().all(|c| *c == Cell::CLEARED),
            "row {} should be vacated for {:?}",
            y,
            full_rows
        );
    }

    for y in (0..LINES).filter(|y| !full_rows.contains(y)) {
        let shift = full_rows.iter().filter(|&&r| r > y).count();
        let target = y + shift;
        let (x, cell) = marker(y);

        let row = field.row(target);
        for (col, c) in row.iter().enumerate() {
            if col as i32 == x {
                assert_eq!(*c, cell, "row {} -> {} for {:?}", y, target, full_rows);
            } else {
                assert!(!c.occupied, "row {} -> {} for {:?}", y, target, full_rows);
            }
        }
    }
}

#[test]
fn test_two_row_clear() {
    check_multi_row_clear(&[18, 19]);
    check_multi_row_clear(&[10, 15]);
}

#[test]
fn test_three_row_clear() {
    check_multi_row_clear(&[15, 17, 19]);
    check_multi_row_clear(&[17, 18, 19]);
}

#[test]
fn test_four_row_clear() {
    check_multi_row_clear(&[16, 17, 18, 19]);
    check_multi_row_clear(&[0, 5, 10, 19]);
}

#[test]
fn test_revalidation_without_full_rows_cancels_nothing() {
    let mut field = Playfield::new();
    assert_eq!(field.validate_field(), 0);
    assert!(!field.is_clearing());
    assert_eq!(field.update(1.0), None);
}
