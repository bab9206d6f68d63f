//! WordBrain board representation
//!
//! A board is a grid of optional letters. Boards are immutable: removing tiles
//! produces a new board with the surviving letters dropped to the bottom of their
//! columns, so search branches can share an ancestor board freely.

use super::Coord;
use std::fmt;
use std::str::FromStr;

/// Characters accepted as row separators in board text
pub const ROW_SEPARATORS: [char; 5] = [',', ';', ':', '\n', '\r'];

/// Character denoting an empty tile in board text
pub const EMPTY_TILE: char = ' ';

/// A rectangular (when valid) grid of letters and empty tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<Vec<Option<char>>>,
}

/// Error type for board lookups and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate lies outside the grid
    OutOfRange {
        pos: Coord,
        width: usize,
        height: usize,
    },
    /// A row's length differs from the first row's
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A tile holds something other than a letter
    InvalidTile { pos: Coord, tile: char },
    /// The board has no rows or no columns
    Empty,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, width, height } => {
                write!(f, "Position {pos} is outside the {width}x{height} board")
            }
            Self::Jagged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {row} has {found} tiles, expected {expected} (rows must be equal length)"
            ),
            Self::InvalidTile { pos, tile } => {
                write!(f, "Tile {pos} holds '{tile}', expected a letter or a space")
            }
            Self::Empty => write!(f, "Board has no tiles"),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Build a board from rows of optional letters
    ///
    /// No validation is performed; see [`Board::validate`].
    #[must_use]
    pub const fn from_rows(rows: Vec<Vec<Option<char>>>) -> Self {
        Self { rows }
    }

    /// Parse board text without validating it
    ///
    /// Rows are separated by any of [`ROW_SEPARATORS`]. A space is an empty tile and
    /// every other character is lowercased and stored as a letter. Trailing empty
    /// rows (e.g. from a final newline) are dropped.
    ///
    /// # Examples
    /// ```
    /// use wordbrain_solver::core::{Board, Coord};
    ///
    /// let board = Board::parse("a c, ef\ngh ");
    /// assert_eq!(board.letter_at(Coord::new(0, 0)), Ok(Some('a')));
    /// assert_eq!(board.letter_at(Coord::new(1, 0)), Ok(None));
    /// assert_eq!(board.letter_count(), 6);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut rows: Vec<Vec<Option<char>>> = text
            .split(ROW_SEPARATORS)
            .map(|row| {
                row.to_lowercase()
                    .chars()
                    .map(|c| (c != EMPTY_TILE).then_some(c))
                    .collect()
            })
            .collect();

        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }

        Self { rows }
    }

    /// Number of columns (length of the first row)
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Get the letter at a position, or `None` for an empty tile
    ///
    /// # Errors
    /// Returns `BoardError::OutOfRange` if `pos` is outside the grid.
    pub fn letter_at(&self, pos: Coord) -> Result<Option<char>, BoardError> {
        self.rows
            .get(pos.row())
            .and_then(|row| row.get(pos.col()))
            .copied()
            .ok_or(BoardError::OutOfRange {
                pos,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Occupied tiles surrounding `pos` (8-directional)
    ///
    /// Empty tiles and positions off the board are left out. Neighbours are returned
    /// in row-major order of the 3x3 neighbourhood.
    ///
    /// # Errors
    /// Returns `BoardError::OutOfRange` if `pos` itself is outside the grid.
    pub fn neighbors(&self, pos: Coord) -> Result<Vec<Coord>, BoardError> {
        self.letter_at(pos)?;

        Ok(pos
            .surrounding()
            .filter(|&n| matches!(self.letter_at(n), Ok(Some(_))))
            .collect())
    }

    /// All occupied positions, top-to-bottom then left-to-right
    #[must_use]
    pub fn occupied_positions(&self) -> Vec<Coord> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, tile)| tile.is_some())
                    .map(move |(x, _)| Coord::new(x, y))
            })
            .collect()
    }

    /// Number of occupied tiles
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.rows.iter().flatten().filter(|tile| tile.is_some()).count()
    }

    /// Check that the board is rectangular and holds only letters
    ///
    /// Every row is compared with the first row's length, so non-square rectangles
    /// are accepted.
    ///
    /// # Errors
    /// Returns the first problem found: `Empty`, `Jagged` or `InvalidTile`.
    pub fn validate(&self) -> Result<(), BoardError> {
        let width = self.width();
        if width == 0 {
            return Err(BoardError::Empty);
        }

        if let Some((row, found)) = self
            .rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(BoardError::Jagged {
                row,
                expected: width,
                found,
            });
        }

        for pos in self.occupied_positions() {
            if let Ok(Some(tile)) = self.letter_at(pos) {
                if !tile.is_alphabetic() {
                    return Err(BoardError::InvalidTile { pos, tile });
                }
            }
        }

        Ok(())
    }

    /// Whether [`Board::validate`] succeeds
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Remove tiles and let the remaining letters fall
    ///
    /// Each column is handled on its own: its surviving letters keep their top-to-bottom
    /// order and are packed against the bottom, with empty tiles above them. Letters
    /// never change column. Positions that are empty or off the board are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordbrain_solver::core::{Board, Coord};
    ///
    /// let board = Board::parse("abc,def,ghi");
    /// let removed = [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 2), Coord::new(2, 1)];
    /// assert_eq!(board.with_tiles_removed(&removed).to_string(), "   \nab \ndhc");
    /// ```
    #[must_use]
    pub fn with_tiles_removed(&self, positions: &[Coord]) -> Self {
        let mut rows: Vec<Vec<Option<char>>> =
            self.rows.iter().map(|row| vec![None; row.len()]).collect();
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);

        for x in 0..columns {
            let survivors: Vec<char> = self
                .rows
                .iter()
                .enumerate()
                .filter_map(|(y, row)| {
                    let letter = (*row.get(x)?)?;
                    (!positions.contains(&Coord::new(x, y))).then_some(letter)
                })
                .collect();

            let slots = rows
                .iter_mut()
                .rev()
                .filter_map(|row| row.get_mut(x));
            for (slot, letter) in slots.zip(survivors.into_iter().rev()) {
                *slot = Some(letter);
            }
        }

        Self { rows }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse and validate board text
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let board = Self::parse(s);
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.unwrap_or(EMPTY_TILE))?;
            }
        }
        Ok(())
    }
}
