//! Grid coordinates and the fixed 8-neighbor direction table.
//!
//! `y` grows downward: `S` is `(0, 1)`, matching row order in the world buffer.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Integer grid coordinate, the key for every world lookup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring coordinate one step in `dir`.
    #[must_use]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.offset()
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass directions used for all neighbor iteration. Discriminants index
/// neighbor tables, so iteration order is `ALL` order.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    N = 0,
    S = 1,
    E = 2,
    W = 3,
    NE = 4,
    NW = 5,
    SE = 6,
    SW = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// The three tiles a cell can rest on.
    pub const BELOW: [Direction; 3] = [Direction::S, Direction::SW, Direction::SE];

    #[must_use]
    pub const fn offset(self) -> Position {
        match self {
            Direction::N => Position::new(0, -1),
            Direction::S => Position::new(0, 1),
            Direction::E => Position::new(1, 0),
            Direction::W => Position::new(-1, 0),
            Direction::NE => Position::new(1, -1),
            Direction::NW => Position::new(-1, -1),
            Direction::SE => Position::new(1, 1),
            Direction::SW => Position::new(-1, 1),
        }
    }

    /// The mirrored direction (negated offset).
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_and_distinct() {
        let mut seen = Vec::new();
        for dir in Direction::ALL {
            let o = dir.offset();
            assert!(o.x.abs() <= 1 && o.y.abs() <= 1);
            assert_ne!(o, Position::new(0, 0));
            assert!(!seen.contains(&o), "{dir:?} duplicates an offset");
            seen.push(o);
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn opposite_negates_offset() {
        for dir in Direction::ALL {
            let o = dir.offset();
            let back = dir.opposite().offset();
            assert_eq!(o + back, Position::new(0, 0));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn index_matches_table_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn south_points_down_the_buffer() {
        let p = Position::new(3, 3);
        assert_eq!(p.step(Direction::S), Position::new(3, 4));
        assert_eq!(p.step(Direction::NW), Position::new(2, 2));
    }
}
