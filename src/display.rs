// Presentation helpers shared by the browser and console frontends. The board is always
// drawn with row 0 at the top.

use serde::{Deserialize, Serialize};

use crate::coord::Coord;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareShade {
    Light,
    Dark,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareHighlight {
    None,
    Selected,
    Candidate,
}

pub fn square_shade(coord: Coord) -> SquareShade {
    if (coord.row.to_zero_based() + coord.col.to_zero_based()) % 2 == 0 {
        SquareShade::Light
    } else {
        SquareShade::Dark
    }
}

pub fn square_highlight(origin: Coord, candidates: &[Coord], coord: Coord) -> SquareHighlight {
    if coord == origin {
        SquareHighlight::Selected
    } else if candidates.contains(&coord) {
        SquareHighlight::Candidate
    } else {
        SquareHighlight::None
    }
}

impl SquareHighlight {
    // CSS class understood by the page stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            SquareHighlight::None => "",
            SquareHighlight::Selected => "square-selected",
            SquareHighlight::Candidate => "square-candidate",
        }
    }
}

impl SquareShade {
    pub fn css_class(self) -> &'static str {
        match self {
            SquareShade::Light => "square-light",
            SquareShade::Dark => "square-dark",
        }
    }
}
