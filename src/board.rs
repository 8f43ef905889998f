//! Game board state: one bit grid per stone color.

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, Color};
use core::fmt;

type Grid = BitGrid<u64>;

/// An N×N board of empty, White or Black cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    white: Grid,
    black: Grid,
}

impl Board {
    /// Create an empty board of the given side length.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            white: Grid::new(size),
            black: Grid::new(size),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of stones on the board.
    pub fn move_count(&self) -> usize {
        self.white.count_ones() + self.black.count_ones()
    }

    /// Returns `true` when every cell holds a stone.
    pub fn is_full(&self) -> bool {
        self.move_count() == self.size * self.size
    }

    /// Occupancy mask of one color.
    pub fn stones(&self, color: Color) -> &Grid {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Owner of the cell at (x, y), if any.
    pub fn get(&self, x: usize, y: usize) -> Result<Option<Color>, BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfBounds { x, y });
        }
        if self.white.get(x, y)? {
            Ok(Some(Color::White))
        } else if self.black.get(x, y)? {
            Ok(Some(Color::Black))
        } else {
            Ok(None)
        }
    }

    /// Place a stone at (x, y); the cell must be empty.
    pub fn place(&mut self, x: usize, y: usize, color: Color) -> Result<(), BoardError> {
        if self.get(x, y)?.is_some() {
            return Err(BoardError::Occupied { x, y });
        }
        match color {
            Color::White => self.white.set(x, y)?,
            Color::Black => self.black.set(x, y)?,
        }
        Ok(())
    }

    /// Iterator over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        (0..n)
            .flat_map(move |x| (0..n).map(move |y| (x, y)))
            .filter(move |&(x, y)| matches!(self.get(x, y), Ok(None)))
    }

    /// Returns `true` when four stones of `color` form the corners of a
    /// square. Generating edges must have strictly positive dx and dy, so
    /// axis-aligned squares never match.
    pub fn has_square(&self, color: Color) -> bool {
        let stones = self.stones(color);
        for (x1, y1) in stones.iter_set_bits() {
            for (x2, y2) in stones.iter_set_bits() {
                if x2 <= x1 || y2 <= y1 {
                    continue;
                }
                let (x1, y1) = (x1 as isize, y1 as isize);
                let (x2, y2) = (x2 as isize, y2 as isize);
                let dx = x2 - x1;
                let dy = y2 - y1;
                // remaining corners, on either side of the edge
                if self.stone_at(stones, x1 + dy, y1 - dx) && self.stone_at(stones, x2 + dy, y2 - dx)
                {
                    return true;
                }
                if self.stone_at(stones, x1 - dy, y1 + dx) && self.stone_at(stones, x2 - dy, y2 + dx)
                {
                    return true;
                }
            }
        }
        false
    }

    fn stone_at(&self, stones: &Grid, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x >= self.size as isize || y >= self.size as isize {
            return false;
        }
        stones.get(x as usize, y as usize).unwrap_or(false)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  white: {:?},\n  black: {:?}\n}}",
            self.size, self.white, self.black
        )
    }
}

/// Human-readable rendering: column header, then one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for y in 0..self.size {
            write!(f, "{} ", y)?;
        }
        writeln!(f)?;
        for x in 0..self.size {
            write!(f, "{} ", x)?;
            for y in 0..self.size {
                let ch = match self.get(x, y) {
                    Ok(Some(color)) => color.as_char(),
                    _ => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
