// Board diagrams for unit and integration tests.

use itertools::Itertools;

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::grid::Grid;
use crate::piece::{piece_from_ascii, piece_to_ascii};
use crate::util::as_single_char;


// Parses a board diagram: 8 lines of 8 whitespace-separated squares, top line is row 0.
// Pieces use FEN letters (uppercase = White), '.' is an empty square.
pub fn parse_grid(diagram: &str) -> Result<Grid, String> {
    let rows = diagram
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.split_ascii_whitespace().collect_vec())
        .collect_vec();
    if rows.len() != NUM_ROWS as usize {
        return Err(format!("expected {} rows, got {}", NUM_ROWS, rows.len()));
    }
    let mut grid = Grid::new();
    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() != NUM_COLS as usize {
            return Err(format!("row {} has {} squares", row_idx, row.len()));
        }
        for (col_idx, square) in row.iter().enumerate() {
            let ch = as_single_char(square).ok_or_else(|| format!("invalid square: {}", square))?;
            if ch == '.' {
                continue;
            }
            let piece = piece_from_ascii(ch).ok_or_else(|| format!("invalid piece: {}", ch))?;
            grid[Coord::from_zero_based(row_idx as u8, col_idx as u8)] = Some(piece);
        }
    }
    Ok(grid)
}

pub fn grid_to_diagram(grid: &Grid) -> String {
    Coord::all()
        .chunks(NUM_COLS as usize)
        .into_iter()
        .map(|row| row.map(|coord| grid[coord].map_or('.', piece_to_ascii)).join(" "))
        .join("\n")
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn diagram_round_trip() {
        let diagram = "\
            r . . . k . . r\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            R . . . K . . R";
        let grid = parse_grid(diagram).unwrap();
        assert_eq!(grid.pieces().count(), 6);
        assert_eq!(grid_to_diagram(&grid), diagram);
    }

    #[test]
    fn bad_diagrams() {
        assert!(parse_grid(". . .").is_err());
        let nine_cols = ". . . . . . . . .\n".repeat(8);
        assert!(parse_grid(&nine_cols).is_err());
        let bad_piece = ". . . . . . . x\n".repeat(8);
        assert!(parse_grid(&bad_piece).is_err());
    }
}
