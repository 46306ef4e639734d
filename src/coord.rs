use std::fmt;
use std::ops;

use itertools::Itertools;
use serde::{Deserialize, Serialize};


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


// Row 0 is the top row as rendered, i.e. rank '8'.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8, // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub const fn try_from_zero_based(idx: i32) -> Option<Self> {
        if 0 <= idx && idx < NUM_ROWS as i32 {
            Some(Self { idx: idx as u8 })
        } else {
            None
        }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let rank = ch.to_digit(10)?;
        if (1..=NUM_ROWS as u32).contains(&rank) {
            Some(Self::from_zero_based(NUM_ROWS - rank as u8))
        } else {
            None
        }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (b'0' + NUM_ROWS - self.idx) as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_ROWS).map(Self::from_zero_based) }
}

impl ops::Sub for Row {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8, // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub const fn try_from_zero_based(idx: i32) -> Option<Self> {
        if 0 <= idx && idx < NUM_COLS as i32 {
            Some(Self { idx: idx as u8 })
        } else {
            None
        }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            Self::try_from_zero_based(ch as i32 - 'a' as i32)
        } else {
            None
        }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (b'a' + self.idx) as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_COLS).map(Self::from_zero_based) }
}

impl ops::Sub for Col {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCoord", into = "WireCoord")]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

// Squares travel as `{"r": 6, "c": 4}`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct WireCoord {
    pub r: i32,
    pub c: i32,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }
    pub const fn from_zero_based(row: u8, col: u8) -> Self {
        Self::new(Row::from_zero_based(row), Col::from_zero_based(col))
    }
    pub fn try_from_zero_based(row: i32, col: i32) -> Option<Self> {
        Some(Self::new(Row::try_from_zero_based(row)?, Col::try_from_zero_based(col)?))
    }
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (col, row) = s.chars().collect_tuple()?;
        Some(Self::new(Row::from_algebraic(row)?, Col::from_algebraic(col)?))
    }
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }
    // Row-major, top-left first.
    pub fn all() -> impl Iterator<Item = Coord> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }
    pub fn offset(self, (d_row, d_col): (i8, i8)) -> Option<Self> {
        Self::try_from_zero_based(
            self.row.to_zero_based() as i32 + d_row as i32,
            self.col.to_zero_based() as i32 + d_col as i32,
        )
    }
}

impl ops::Sub for Coord {
    type Output = (i8, i8);
    fn sub(self, other: Self) -> Self::Output { (self.row - other.row, self.col - other.col) }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coord({}, {} / {})",
            self.row.to_zero_based(),
            self.col.to_zero_based(),
            self.to_algebraic()
        )
    }
}

impl TryFrom<WireCoord> for Coord {
    type Error = String;
    fn try_from(wire: WireCoord) -> Result<Self, Self::Error> {
        Coord::try_from_zero_based(wire.r, wire.c)
            .ok_or_else(|| format!("square out of board: ({}, {})", wire.r, wire.c))
    }
}

impl From<Coord> for WireCoord {
    fn from(coord: Coord) -> Self {
        WireCoord {
            r: coord.row.to_zero_based().into(),
            c: coord.col.to_zero_based().into(),
        }
    }
}

// Accepts either algebraic ("e2") or zero-based "row,col" ("6,4").
pub fn parse_square(s: &str) -> Option<Coord> {
    let s = s.trim();
    if let Some((row, col)) = s.split(',').collect_tuple() {
        return Coord::try_from_zero_based(row.trim().parse().ok()?, col.trim().parse().ok()?);
    }
    Coord::from_algebraic(s)
}
