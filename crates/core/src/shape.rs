//! Shape module - occupancy mask for one orientation of one piece
//!
//! A shape is a square boolean mask addressed `[row][col]`, built once from a
//! row-major table of `'0'`/`'1'` characters and never mutated afterwards.

/// Largest mask side (the I piece uses 4x4)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Immutable occupancy mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    bits: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from its definition rows
    ///
    /// Every row must be exactly as long as there are rows, and contain only
    /// `'0'` and `'1'`. Used on constant tables, so a malformed table fails
    /// at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// use marathon_core::shape::Shape;
    ///
    /// let t = Shape::from_rows(&["010", "111", "000"]);
    /// assert_eq!(t.size(), 3);
    /// assert!(t.is_filled(0, 1));
    /// assert!(!t.is_filled(0, 0));
    /// ```
    pub const fn from_rows(rows: &[&str]) -> Shape {
        let size = rows.len();
        assert!(size > 0 && size <= MAX_SHAPE_SIZE, "shape size out of range");

        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut row = 0;
        while row < size {
            let line = rows[row].as_bytes();
            assert!(line.len() == size, "shape rows must be square");
            let mut col = 0;
            while col < size {
                bits[row][col] = match line[col] {
                    b'1' => true,
                    b'0' => false,
                    _ => panic!("shape rows may only contain '0' and '1'"),
                };
                col += 1;
            }
            row += 1;
        }

        Shape { size, bits }
    }

    /// Side length of the mask
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the mask is filled at `[row][col]`; false outside the mask
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.bits[row][col]
    }

    /// Filled cells as `(x, y)` offsets from the mask origin, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size)
                .filter(move |&x| self.bits[y][x])
                .map(move |x| (x as i32, y as i32))
        })
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.filled_cells().count()
    }
}
