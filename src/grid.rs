use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown direction {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u16,
    pub col: u16,
}

impl Pos {
    pub fn new(row: u16, col: u16) -> Self {
        Pos { row, col }
    }

    pub fn wrapped_add(&self, delta: PosDelta, size: Size) -> Pos {
        let row = (self.row as i32 + delta.row).rem_euclid(size.height as i32) as u16;
        let col = (self.col as i32 + delta.col).rem_euclid(size.width as i32) as u16;
        Pos { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosDelta {
    pub row: i32,
    pub col: i32,
}

impl PosDelta {
    pub fn between(from: Pos, to: Pos) -> Self {
        PosDelta {
            row: to.row as i32 - from.row as i32,
            col: to.col as i32 - from.col as i32,
        }
    }

    pub fn crosses_edge(&self) -> bool {
        self.row.abs() > 1 || self.col.abs() > 1
    }
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { row: -1, col: 0 },
            Direction::Down => PosDelta { row: 1, col: 0 },
            Direction::Left => PosDelta { row: 0, col: -1 },
            Direction::Right => PosDelta { row: 0, col: 1 },
        }
    }
}
