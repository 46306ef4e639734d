use std::{fmt, ops};

use itertools::Itertools;
use ndarray::{Array, Array2};
use serde::{Deserialize, Serialize};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::piece::Piece;


// Board snapshot. On the wire: 8 rows of 8 piece codes, "" for an empty square.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Grid {
    data: Array2<Option<Piece>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|coord| self[coord].map(|piece| (coord, piece)))
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<Piece>;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output { &mut self.data[coord_to_index(pos)] }
}

fn coord_to_index(pos: Coord) -> [usize; 2] {
    [pos.row.to_zero_based() as usize, pos.col.to_zero_based() as usize]
}

impl TryFrom<Vec<Vec<String>>> for Grid {
    type Error = String;
    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        if rows.len() != NUM_ROWS as usize {
            return Err(format!("expected {} rows, got {}", NUM_ROWS, rows.len()));
        }
        let mut grid = Grid::new();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != NUM_COLS as usize {
                return Err(format!(
                    "expected {} squares in row {}, got {}",
                    NUM_COLS,
                    row_idx,
                    row.len()
                ));
            }
            for (col_idx, code) in row.iter().enumerate() {
                if !code.is_empty() {
                    let coord = Coord::from_zero_based(row_idx as u8, col_idx as u8);
                    grid[coord] = Some(Piece::from_code(code)?);
                }
            }
        }
        Ok(grid)
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        grid.data
            .rows()
            .into_iter()
            .map(|row| {
                row.iter().map(|piece| piece.map_or_else(String::new, Piece::to_code)).collect_vec()
            })
            .collect_vec()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.pieces().map(|(coord, piece)| (coord.to_algebraic(), piece.to_code())))
            .finish()
    }
}
