#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod candidates;
pub mod client;
pub mod coord;
pub mod display;
pub mod event;
pub mod force;
pub mod grid;
pub mod piece;
pub mod test_util;
pub mod util;

pub use candidates::{compute_candidates, is_candidate};
pub use client::{ClickError, ClickOutcome, ClientState, EventError, NotableEvent};
pub use coord::Coord;
pub use event::{ChessState, ClientEvent, GameKind, ServerEvent};
pub use force::Force;
pub use grid::Grid;
pub use piece::{Piece, PieceKind};
