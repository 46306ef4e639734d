use console::Style;
use duel_client::coord::{Col, Coord, Row};
use duel_client::display::{SquareHighlight, SquareShade, square_highlight, square_shade};
use duel_client::grid::Grid;
use duel_client::piece::piece_to_pictogram;


fn square_style(shade: SquareShade, highlight: SquareHighlight) -> Style {
    let style = Style::new().color256(233);
    match highlight {
        SquareHighlight::Selected => style.on_color256(214),
        SquareHighlight::Candidate => style.on_color256(151),
        SquareHighlight::None => match shade {
            SquareShade::Light => style.on_color256(230),
            SquareShade::Dark => style.on_color256(222),
        },
    }
}

// Row 0 (Black's home row) is at the top, same as in the browser.
pub fn render_grid(grid: &Grid, origin: Coord, candidates: &[Coord]) -> String {
    let mut ret = String::new();
    ret.push_str(&format_square(' '));
    for col in Col::all() {
        ret.push_str(&format_square(col.to_algebraic()));
    }
    ret.push('\n');
    for row in Row::all() {
        ret.push_str(&format_square(row.to_algebraic()));
        for col in Col::all() {
            let coord = Coord::new(row, col);
            let style = square_style(square_shade(coord), square_highlight(origin, candidates, coord));
            let ch = grid[coord].map_or(' ', piece_to_pictogram);
            ret.push_str(&style.apply_to(format_square(ch)).to_string());
        }
        ret.push_str(&format_square(row.to_algebraic()));
        ret.push('\n');
    }
    ret
}

fn format_square(ch: char) -> String { format!(" {} ", ch) }
