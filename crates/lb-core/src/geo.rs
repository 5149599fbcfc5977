//! Grid geometry: 1-based positions and the four facing directions.

use std::fmt;

use crate::CoreError;

/// A 1-based grid coordinate.  `x` grows to the right, `y` grows downward.
///
/// Signed so that stepping off the board (e.g. to `x = 0`) is representable;
/// the board treats every such coordinate as a wall.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours in a fixed order (down, up, right, left).
    pub fn neighbours(self) -> [Position; 4] {
        [
            Position::new(self.x, self.y + 1),
            Position::new(self.x, self.y - 1),
            Position::new(self.x + 1, self.y),
            Position::new(self.x - 1, self.y),
        ]
    }

    /// Parse the `x,y` form used by `existsPath` arguments.
    pub fn parse_pair(s: &str) -> Result<Position, CoreError> {
        let invalid = || CoreError::InvalidCoordinate(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Position::new(x, y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Facing direction of a ladybug.  The declaration order is the clockwise
/// 4-cycle used for turning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    const CYCLE: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Board glyph drawn for a ladybug facing this way.
    pub fn glyph(self) -> char {
        match self {
            Direction::Up    => '^',
            Direction::Right => '>',
            Direction::Down  => 'v',
            Direction::Left  => '<',
        }
    }

    pub fn from_glyph(c: char) -> Result<Direction, CoreError> {
        match c {
            '^' => Ok(Direction::Up),
            '>' => Ok(Direction::Right),
            'v' => Ok(Direction::Down),
            '<' => Ok(Direction::Left),
            other => Err(CoreError::NotADirection(other)),
        }
    }

    /// `(dx, dy)` of one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
        }
    }

    /// Clockwise successor.
    pub fn turn_right(self) -> Direction {
        Self::CYCLE[(self as usize + 1) % 4]
    }

    /// Counter-clockwise predecessor.
    pub fn turn_left(self) -> Direction {
        Self::CYCLE[(self as usize + 3) % 4]
    }

    /// Direction of the dominant axis of the displacement `(dx, dy)`.
    ///
    /// Ties (including the zero displacement) resolve to the horizontal axis.
    pub fn dominant(dx: i32, dy: i32) -> Direction {
        if dx.abs() >= dy.abs() {
            if dx > 0 { Direction::Right } else { Direction::Left }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
