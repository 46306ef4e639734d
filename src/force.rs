use serde::{Deserialize, Serialize};
use strum::EnumIter;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumIter, Serialize, Deserialize)]
pub enum Force {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl Force {
    // Row 0 is at the top and White starts at the bottom, so White moves up.
    pub fn direction_forward(self) -> i8 {
        match self {
            Force::White => -1,
            Force::Black => 1,
        }
    }

    pub fn to_wire_char(self) -> char {
        match self {
            Force::White => 'w',
            Force::Black => 'b',
        }
    }

    pub fn from_wire_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(Force::White),
            'b' => Some(Force::Black),
            _ => None,
        }
    }
}
