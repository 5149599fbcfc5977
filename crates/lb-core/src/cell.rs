//! The board glyph set.

use std::fmt;

use crate::{CoreError, Direction};

/// Contents of one board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `#`, a tree trunk.  Also what every out-of-bounds coordinate reads as.
    Wall,
    /// `.`
    Empty,
    /// `*`
    Leaf,
    /// `o`, pushable.
    Mushroom,
    /// One of `^ > v <`.
    Ladybug(Direction),
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall       => '#',
            Cell::Empty      => '.',
            Cell::Leaf       => '*',
            Cell::Mushroom   => 'o',
            Cell::Ladybug(d) => d.glyph(),
        }
    }

    pub fn from_glyph(c: char) -> Result<Cell, CoreError> {
        match c {
            '#' => Ok(Cell::Wall),
            '.' => Ok(Cell::Empty),
            '*' => Ok(Cell::Leaf),
            'o' => Ok(Cell::Mushroom),
            other => Direction::from_glyph(other)
                .map(Cell::Ladybug)
                .map_err(|_| CoreError::UnknownGlyph(other)),
        }
    }

    /// Cells the reachability search may step through.
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Mushroom)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
