use std::fmt;

use derive_new::new;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

// On the wire a piece is a two-character code: force first, then kind ("wP", "bK").
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Piece {
    pub force: Force,
    pub kind: PieceKind,
}

impl PieceKind {
    pub fn to_wire_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_wire_char(ch: char) -> Option<Self> {
        match ch {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl Piece {
    pub fn from_code(code: &str) -> Result<Self, String> {
        let (force_ch, kind_ch) =
            code.chars().collect_tuple().ok_or_else(|| format!("invalid piece code: {:?}", code))?;
        let force = Force::from_wire_char(force_ch)
            .ok_or_else(|| format!("invalid piece force in {:?}", code))?;
        let kind = PieceKind::from_wire_char(kind_ch)
            .ok_or_else(|| format!("invalid piece kind in {:?}", code))?;
        Ok(Piece { force, kind })
    }

    pub fn to_code(self) -> String {
        format!("{}{}", self.force.to_wire_char(), self.kind.to_wire_char())
    }
}

impl TryFrom<String> for Piece {
    type Error = String;
    fn try_from(code: String) -> Result<Self, Self::Error> { Piece::from_code(&code) }
}

impl From<Piece> for String {
    fn from(piece: Piece) -> Self { piece.to_code() }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_code()) }
}

// Board diagrams use FEN-style letters: uppercase for White, lowercase for Black.
pub fn piece_to_ascii(piece: Piece) -> char {
    let ch = piece.kind.to_wire_char();
    match piece.force {
        Force::White => ch,
        Force::Black => ch.to_ascii_lowercase(),
    }
}

pub fn piece_from_ascii(ch: char) -> Option<Piece> {
    let kind = PieceKind::from_wire_char(ch.to_ascii_uppercase())?;
    let force = if ch.is_ascii_uppercase() { Force::White } else { Force::Black };
    Some(Piece { force, kind })
}

pub fn piece_to_pictogram(piece: Piece) -> char {
    use self::Force::*;
    use self::PieceKind::*;
    match (piece.force, piece.kind) {
        (White, Pawn) => '♙',
        (White, Knight) => '♘',
        (White, Bishop) => '♗',
        (White, Rook) => '♖',
        (White, Queen) => '♕',
        (White, King) => '♔',
        (Black, Pawn) => '♟',
        (Black, Knight) => '♞',
        (Black, Bishop) => '♝',
        (Black, Rook) => '♜',
        (Black, Queen) => '♛',
        (Black, King) => '♚',
    }
}
