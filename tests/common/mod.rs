// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::sync::mpsc;

use duel_client::client::ClientState;
use duel_client::event::{ClientEvent, ServerEvent};
use duel_client::grid::Grid;
use duel_client::test_util::parse_grid;
use serde_json::json;


#[allow(dead_code)]
pub const ALICE: &str = "sid-alice";
#[allow(dead_code)]
pub const BOB: &str = "sid-bob";
#[allow(dead_code)]
pub const ROOM: &str = "QX7K2P";

#[allow(dead_code)]
pub const STARTING_POSITION: &str = "
    r n b q k b n r
    p p p p p p p p
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    P P P P P P P P
    R N B Q K B N R
";

#[macro_export]
macro_rules! sq {
    ($row:literal, $col:literal) => {
        duel_client::coord::Coord::from_zero_based($row, $col)
    };
}

#[allow(dead_code)]
pub fn grid(diagram: &str) -> Grid { parse_grid(diagram).unwrap() }

// Alice plays White, Bob plays Black.
#[allow(dead_code)]
pub fn chess_state_json(diagram: &str, turn: &str) -> serde_json::Value {
    json!({
        "board": grid(diagram),
        "turn": turn,
        "color_of": { "sid-alice": "w", "sid-bob": "b" }
    })
}

#[allow(dead_code)]
pub fn chess_start_ack(diagram: &str) -> ServerEvent {
    serde_json::from_value(json!({
        "event": "start_ack",
        "data": {
            "code": ROOM,
            "state": chess_state_json(diagram, "w"),
            "players": [
                { "sid": ALICE, "name": "Alice", "secretSet": true },
                { "sid": BOB, "name": "Bob", "secretSet": true }
            ],
            "game": "chess"
        }
    }))
    .unwrap()
}

#[allow(dead_code)]
pub fn chess_state_update(diagram: &str, turn: &str) -> ServerEvent {
    serde_json::from_value(json!({
        "event": "state_update",
        "data": { "state": chess_state_json(diagram, turn) }
    }))
    .unwrap()
}

#[allow(dead_code)]
pub struct TestClient {
    pub state: ClientState,
    pub outgoing: mpsc::Receiver<ClientEvent>,
}

impl TestClient {
    #[allow(dead_code)]
    pub fn new(my_sid: &str) -> Self {
        let (tx, rx) = mpsc::channel();
        TestClient {
            state: ClientState::new(my_sid.to_owned(), tx),
            outgoing: rx,
        }
    }

    #[allow(dead_code)]
    pub fn sent_events(&self) -> Vec<ClientEvent> { self.outgoing.try_iter().collect() }
}
