// Messages exchanged with the game server. Each event travels as
// `{"event": <socket event name>, "data": <payload>}`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Ludo,
    Chess,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PlayerInRoom {
    pub sid: String,
    pub name: String,
    #[serde(rename = "secretSet", default)]
    pub secret_set: bool,
}

// Chess snapshot owned by the server. Replaced wholesale on every update.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChessState {
    pub board: Grid,
    pub turn: Force,
    #[serde(default)]
    pub color_of: HashMap<String, Force>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    StartAck {
        code: String,
        // Game-specific, decoded by the client once `game` is known.
        state: serde_json::Value,
        players: Vec<PlayerInRoom>,
        game: GameKind,
    },
    StateUpdate {
        state: serde_json::Value,
    },
    IllegalMove {
        msg: String,
    },
    NotYourTurn {
        msg: String,
    },
    // Ludo: a token move the server refused.
    InvalidMove {
        msg: String,
    },
    // Ludo: tried to move a token before rolling.
    NoDice {
        msg: String,
    },
    DiceResult {
        val: u8,
    },
    GameOver {
        #[serde(rename = "winnerSid")]
        winner_sid: String,
        #[serde(rename = "winnerName")]
        winner_name: String,
    },
    RevealSecret {
        secret: String,
    },
    LeftRoom {},
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    ChessMove {
        room: String,
        from: Coord,
        to: Coord,
    },
    Resign {
        room: String,
    },
    RollDice {
        room: String,
    },
    LeaveRoom {
        room: String,
    },
}
