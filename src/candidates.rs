// Move candidates for highlighting a selected piece.
//
// This is purely geometric: it does not test whether the mover's own king is left in check,
// does not generate castling, en passant or pawn double steps, and does not care whose turn
// it is. The server re-validates every submitted move, so a candidate is a hint, not a promise.

use crate::coord::Coord;
use crate::grid::Grid;
use crate::piece::PieceKind;
use crate::util::sort_two;


// Returns all squares the piece at `from` could plausibly move to, in row-major order.
// An empty `from` square yields no candidates.
pub fn compute_candidates(grid: &Grid, from: Coord) -> Vec<Coord> {
    if grid[from].is_none() {
        return Vec::new();
    }
    Coord::all().filter(|&to| is_candidate(grid, from, to)).collect()
}

pub fn is_candidate(grid: &Grid, from: Coord, to: Coord) -> bool {
    let Some(piece) = grid[from] else {
        return false;
    };
    let target = grid[to];
    if target.is_some_and(|target| target.force == piece.force) {
        // Also rules out `to == from`.
        return false;
    }

    let (d_row, d_col) = to - from;
    let is_straight_move = d_row == 0 || d_col == 0;
    let is_diagonal_move = d_row.abs() == d_col.abs();

    match piece.kind {
        PieceKind::Pawn => {
            if d_row != piece.force.direction_forward() {
                return false;
            }
            match d_col.abs() {
                0 => target.is_none(),
                1 => target.is_some(),
                _ => false,
            }
        }
        PieceKind::Knight => sort_two((d_row.abs(), d_col.abs())) == (1, 2),
        PieceKind::Bishop => is_diagonal_move && has_clear_path(grid, from, to),
        PieceKind::Rook => is_straight_move && has_clear_path(grid, from, to),
        PieceKind::Queen => {
            (is_straight_move || is_diagonal_move) && has_clear_path(grid, from, to)
        }
        PieceKind::King => d_row.abs().max(d_col.abs()) == 1,
    }
}

// Tests that squares between `from` (exclusive) and `to` (exclusive) are free.
// Only meaningful for straight and diagonal lines.
fn has_clear_path(grid: &Grid, from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = to - from;
    let steps = d_row.abs().max(d_col.abs());
    if steps == 0 {
        return true;
    }
    let direction = (d_row / steps, d_col / steps);
    (1..steps).all(|s| {
        from.offset((direction.0 * s, direction.1 * s))
            .is_some_and(|pos| grid[pos].is_none())
    })
}


#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::force::Force;
    use crate::piece::Piece;
    use crate::test_util::parse_grid;

    fn sq(row: u8, col: u8) -> Coord { Coord::from_zero_based(row, col) }

    fn sorted(coords: impl IntoIterator<Item = Coord>) -> Vec<Coord> {
        coords
            .into_iter()
            .sorted_by_key(|c| (c.row.to_zero_based(), c.col.to_zero_based()))
            .collect()
    }

    #[test]
    fn empty_origin() {
        let grid = parse_grid(
            "
            r n b q k b n r
            p p p p p p p p
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            P P P P P P P P
            R N B Q K B N R
        ",
        )
        .unwrap();
        for from in Coord::all().filter(|&c| grid[c].is_none()) {
            assert!(compute_candidates(&grid, from).is_empty());
        }
    }

    #[test]
    fn never_lands_on_own_piece() {
        let grid = parse_grid(
            "
            r . b q k . n r
            p p p . . p p p
            . . n . . . . .
            . . b p p . . .
            . . B . P . . .
            . . . . . N . .
            P P P P . P P P
            R N B Q K . . R
        ",
        )
        .unwrap();
        for (from, piece) in grid.pieces() {
            for to in compute_candidates(&grid, from) {
                assert!(
                    grid[to].is_none_or(|target| target.force != piece.force),
                    "{:?} from {:?} lands on own piece at {:?}",
                    piece,
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let grid = parse_grid(
            "
            . . . . . . . .
            . . . . . . . .
            . . . P P P . .
            . . . P N P . .
            . . . P P p . .
            . . . . . P . .
            . . . . . . . .
            . . . . . . . .
        ",
        )
        .unwrap();
        let candidates = compute_candidates(&grid, sq(3, 4));
        // (r+2, c+1) is occupied by a white pawn.
        assert!(!candidates.contains(&sq(5, 5)));
        assert_eq!(
            sorted(candidates),
            vec![sq(1, 3), sq(1, 5), sq(2, 2), sq(2, 6), sq(4, 2), sq(4, 6), sq(5, 3)]
        );

        let mut grid = grid;
        grid[sq(5, 5)] = Some(Piece::new(Force::Black, PieceKind::Rook));
        assert!(compute_candidates(&grid, sq(3, 4)).contains(&sq(5, 5)));
        grid[sq(5, 5)] = None;
        assert!(compute_candidates(&grid, sq(3, 4)).contains(&sq(5, 5)));
    }

    #[test]
    fn knight_near_edge() {
        let grid = parse_grid(
            "
            N . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        ",
        )
        .unwrap();
        assert_eq!(sorted(compute_candidates(&grid, sq(0, 0))), vec![sq(1, 2), sq(2, 1)]);
    }

    #[test]
    fn sliders_stop_at_first_piece() {
        let grid = parse_grid(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . p . R . . P .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        ",
        )
        .unwrap();
        let candidates = compute_candidates(&grid, sq(4, 3));
        // Left: capture at (4, 1), nothing beyond.
        assert!(candidates.contains(&sq(4, 2)));
        assert!(candidates.contains(&sq(4, 1)));
        assert!(!candidates.contains(&sq(4, 0)));
        // Right: own pawn at (4, 6) blocks itself and beyond.
        assert!(candidates.contains(&sq(4, 5)));
        assert!(!candidates.contains(&sq(4, 6)));
        assert!(!candidates.contains(&sq(4, 7)));
        // Vertical is open.
        for row in [0, 1, 2, 3, 5, 6, 7] {
            assert!(candidates.contains(&sq(row, 3)));
        }
        assert_eq!(candidates.len(), 2 + 2 + 7);
    }

    #[test]
    fn bishop_diagonals() {
        let grid = parse_grid(
            "
            . . . . . . . .
            . n . . . . . .
            . . . . . . . .
            . . . b . . . .
            . . . . . . . .
            . . . . . B . .
            . . . . . . . .
            . . . . . . . .
        ",
        )
        .unwrap();
        let candidates = sorted(compute_candidates(&grid, sq(3, 3)));
        assert_eq!(
            candidates,
            vec![
                sq(0, 6),
                sq(1, 5),
                sq(2, 2),
                sq(2, 4),
                sq(4, 2),
                sq(4, 4),
                sq(5, 1),
                sq(5, 5),
                sq(6, 0),
            ]
        );
    }

    #[test]
    fn queen_scenario() {
        let grid = parse_grid(
            "
            Q . . . . p . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        ",
        )
        .unwrap();
        let candidates = compute_candidates(&grid, sq(0, 0));
        for col in 1..=5 {
            assert!(candidates.contains(&sq(0, col)));
        }
        assert!(!candidates.contains(&sq(0, 6)));
        assert!(!candidates.contains(&sq(0, 7)));
        // Plus the full file and the long diagonal.
        assert_eq!(candidates.len(), 5 + 7 + 7);
    }

    #[test]
    fn pawn_forward_step() {
        let mut grid = Grid::new();
        let white_pawn = Piece::new(Force::White, PieceKind::Pawn);
        grid[sq(6, 4)] = Some(white_pawn);
        assert_eq!(compute_candidates(&grid, sq(6, 4)), vec![sq(5, 4)]);

        // No double step even from the starting row.
        assert!(!compute_candidates(&grid, sq(6, 4)).contains(&sq(4, 4)));

        grid[sq(5, 4)] = Some(Piece::new(Force::Black, PieceKind::Knight));
        assert!(compute_candidates(&grid, sq(6, 4)).is_empty());
        grid[sq(5, 4)] = Some(Piece::new(Force::White, PieceKind::Knight));
        assert!(compute_candidates(&grid, sq(6, 4)).is_empty());
    }

    #[test]
    fn pawn_diagonal_capture() {
        let mut grid = Grid::new();
        grid[sq(6, 4)] = Some(Piece::new(Force::White, PieceKind::Pawn));
        grid[sq(5, 4)] = Some(Piece::new(Force::Black, PieceKind::Pawn));

        assert!(!compute_candidates(&grid, sq(6, 4)).contains(&sq(5, 3)));
        grid[sq(5, 3)] = Some(Piece::new(Force::Black, PieceKind::Bishop));
        assert_eq!(compute_candidates(&grid, sq(6, 4)), vec![sq(5, 3)]);
        grid[sq(5, 3)] = Some(Piece::new(Force::White, PieceKind::Bishop));
        assert!(compute_candidates(&grid, sq(6, 4)).is_empty());
    }

    #[test]
    fn black_pawn_moves_down() {
        let grid = parse_grid(
            "
            . . . . . . . .
            . . . p . . . .
            . . N . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        ",
        )
        .unwrap();
        assert_eq!(sorted(compute_candidates(&grid, sq(1, 3))), vec![sq(2, 2), sq(2, 3)]);
    }

    #[test]
    fn king_adjacent_squares() {
        let grid = parse_grid(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . P p . . .
            . . . . K . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        ",
        )
        .unwrap();
        let candidates = compute_candidates(&grid, sq(4, 4));
        assert_eq!(
            sorted(candidates.clone()),
            vec![sq(3, 4), sq(3, 5), sq(4, 3), sq(4, 5), sq(5, 3), sq(5, 4), sq(5, 5)]
        );
        for to in &candidates {
            let (d_row, d_col) = *to - sq(4, 4);
            assert!(d_row.abs().max(d_col.abs()) == 1);
        }
    }

    #[test]
    fn king_in_corner() {
        let grid = parse_grid(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . k
        ",
        )
        .unwrap();
        assert_eq!(sorted(compute_candidates(&grid, sq(7, 7))), vec![sq(6, 6), sq(6, 7), sq(7, 6)]);
    }

    #[test]
    fn snapshot_is_untouched() {
        let grid = parse_grid(
            "
            r n b q k b n r
            p p p p p p p p
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            P P P P P P P P
            R N B Q K B N R
        ",
        )
        .unwrap();
        let before = grid.clone();
        for from in Coord::all() {
            compute_candidates(&grid, from);
        }
        assert_eq!(grid, before);
        // Only knights and pawns can move in the starting position.
        assert!(compute_candidates(&grid, sq(7, 3)).is_empty());
        assert_eq!(sorted(compute_candidates(&grid, sq(7, 1))), vec![sq(5, 0), sq(5, 2)]);
    }
}
