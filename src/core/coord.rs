//! Board coordinates
//!
//! A `Coord` addresses one tile as (column, row), zero-indexed from the top-left.

use std::fmt;

/// Position of a tile on a board
///
/// Columns grow to the right and rows grow downward. Both components are unsigned,
/// so a coordinate can never be negative.
///
/// Ordering is row-major (row first, then column), which is the order the solver
/// visits starting tiles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    col: usize,
    row: usize,
}

impl Coord {
    /// Create a coordinate from a column and a row
    ///
    /// # Examples
    /// ```
    /// use wordbrain_solver::core::Coord;
    ///
    /// let pos = Coord::new(1, 2);
    /// assert_eq!(pos.col(), 1);
    /// assert_eq!(pos.row(), 2);
    /// assert_eq!(pos.to_string(), "(1,2)");
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Distance from the left edge
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Distance from the top edge
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Whether `other` is one of the eight tiles surrounding this one
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        dc <= 1 && dr <= 1 && (dc + dr) > 0
    }

    /// The up-to-8 surrounding coordinates that do not fall off the top or left edge
    ///
    /// Yielded in row-major order of the 3x3 neighbourhood. Right and bottom edges are
    /// the board's concern.
    pub(crate) fn surrounding(self) -> impl Iterator<Item = Self> {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dc, dr)))
            .filter(|&offset| offset != (0, 0))
            .filter_map(move |(dc, dr)| {
                let col = self.col.checked_add_signed(dc)?;
                let row = self.row.checked_add_signed(dr)?;
                Some(Self::new(col, row))
            })
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}
