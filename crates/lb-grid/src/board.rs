//! The grid world.
//!
//! # Data layout
//!
//! Cells are stored row-major in one flat `Vec<Cell>`; the cell at 1-based
//! `(x, y)` lives at `(y - 1) * width + (x - 1)`.  Dimensions are fixed at
//! construction.  Every coordinate outside `[1, width] × [1, height]` reads
//! as [`Cell::Wall`] and silently ignores writes, so movement code never has
//! to bounds-check before probing a neighbour.

use std::fmt;

use lb_core::{Cell, Position};

use crate::{BoardDefect, GridResult};

/// Fixed-size character grid with 1-based coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width:  usize,
    height: usize,
    cells:  Vec<Cell>,
}

impl Board {
    /// Build a board from its text rows.
    ///
    /// Rejects an empty block, an empty first row, rows of unequal length,
    /// and glyphs outside the board alphabet.  A trailing `\r` on any row is
    /// ignored.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> GridResult<Board> {
        let rows: Vec<&str> = lines
            .iter()
            .map(|l| l.as_ref().trim_end_matches('\r'))
            .collect();

        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(BoardDefect::Empty.into());
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(BoardDefect::RaggedRow { row: row + 1, expected: width, got }.into());
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::from_glyph(c).map_err(|source| BoardDefect::BadGlyph {
                    row: row + 1,
                    col: col + 1,
                    source,
                })?;
                cells.push(cell);
            }
        }

        Ok(Board { width, height: rows.len(), cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` if `pos` lies inside `[1, width] × [1, height]`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.y >= 1 && pos.x as usize <= self.width && pos.y as usize <= self.height
    }

    #[inline]
    fn offset(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| (pos.y as usize - 1) * self.width + (pos.x as usize - 1))
    }

    /// Cell at `pos`; [`Cell::Wall`] for any out-of-bounds coordinate.
    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        self.offset(pos).map_or(Cell::Wall, |i| self.cells[i])
    }

    /// Overwrite the cell at `pos`.  Out-of-bounds writes are ignored and
    /// return `false`.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.offset(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// `true` if `pos` is on the outermost ring of the board.
    pub fn is_edge(&self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.x == 1
                || pos.y == 1
                || pos.x as usize == self.width
                || pos.y as usize == self.height)
    }

    /// Every in-bounds position with its cell, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let pos = Position::new((i % width) as i32 + 1, (i / width) as i32 + 1);
            (pos, cell)
        })
    }

    /// The board rows as plain glyph strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.glyph()).collect())
    }
}

/// Bordered rendering:
///
/// ```text
/// +---+
/// |.>.|
/// +---+
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.width);
        writeln!(f, "+{rule}+")?;
        for row in self.rows() {
            writeln!(f, "|{row}|")?;
        }
        write!(f, "+{rule}+")
    }
}
