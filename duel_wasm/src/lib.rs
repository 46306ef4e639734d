// Browser bindings. The page owns the socket and the DOM: it feeds server events in, drains
// outgoing events and asks how each square should look.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod web_error_handling;

use std::sync::mpsc;

use duel_client::client::{ClickOutcome, ClientState, NotableEvent};
use duel_client::coord::Coord;
use duel_client::display;
use duel_client::event::{ClientEvent, GameKind, ServerEvent};
use duel_client::piece::piece_to_pictogram;
use wasm_bindgen::prelude::*;

use crate::web_error_handling::JsResult;


#[wasm_bindgen(getter_with_clone)]
pub struct JsEventGameStarted {
    pub game: String,
}

#[wasm_bindgen]
pub struct JsEventStateUpdated {}

#[wasm_bindgen(getter_with_clone)]
pub struct JsEventMoveRejected {
    pub message: String,
}

#[wasm_bindgen]
pub struct JsEventDiceRolled {
    pub value: u8,
}

#[wasm_bindgen(getter_with_clone)]
pub struct JsEventGameOver {
    pub winner_name: String,
    pub i_won: bool,
}

#[wasm_bindgen(getter_with_clone)]
pub struct JsEventSecretRevealed {
    pub secret: String,
}

#[wasm_bindgen]
pub struct JsEventLeftRoom {}


#[wasm_bindgen]
pub struct WebClient {
    state: ClientState,
    server_rx: mpsc::Receiver<ClientEvent>,
}

#[wasm_bindgen]
impl WebClient {
    pub fn new_client(my_sid: &str) -> WebClient {
        let (server_tx, server_rx) = mpsc::channel();
        WebClient {
            state: ClientState::new(my_sid.to_owned(), server_tx),
            server_rx,
        }
    }

    // Expects `{"event": <name>, "data": <payload>}` as received from the socket.
    pub fn process_server_event(&mut self, event: &str) -> JsResult<JsValue> {
        let server_event: ServerEvent = serde_json::from_str(event)
            .map_err(|err| rust_error!("Cannot parse server event: {}", err))?;
        let notable = self
            .state
            .process_server_event(server_event)
            .map_err(|err| rust_error!("{:?}", err))?;
        Ok(match notable {
            NotableEvent::GameStarted(game) => {
                JsEventGameStarted { game: game_kind_name(game).to_owned() }.into()
            }
            NotableEvent::StateUpdated => JsEventStateUpdated {}.into(),
            NotableEvent::MoveRejected(message) => JsEventMoveRejected { message }.into(),
            NotableEvent::DiceRolled(value) => JsEventDiceRolled { value }.into(),
            NotableEvent::GameOver { winner_name, i_won } => {
                JsEventGameOver { winner_name, i_won }.into()
            }
            NotableEvent::SecretRevealed(secret) => JsEventSecretRevealed { secret }.into(),
            NotableEvent::LeftRoom => JsEventLeftRoom {}.into(),
        })
    }

    pub fn next_outgoing_event(&mut self) -> JsResult<Option<String>> {
        match self.server_rx.try_recv() {
            Ok(event) => serde_json::to_string(&event)
                .map(Some)
                .map_err(|err| rust_error!("Cannot serialize {:?}: {}", event, err)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(rust_error!("Event channel disconnected")),
        }
    }

    // Returns "ignored", "selected" or "move_submitted". The page should re-render the
    // highlights in any case.
    pub fn click(&mut self, row: u8, col: u8) -> JsResult<String> {
        let coord = to_coord(row, col)?;
        let outcome = self.state.click(coord).map_err(|err| rust_error!("{:?}", err))?;
        Ok(match outcome {
            ClickOutcome::Ignored => "ignored",
            ClickOutcome::Selected { .. } => "selected",
            ClickOutcome::MoveSubmitted { .. } => "move_submitted",
        }
        .to_owned())
    }

    pub fn deselect(&mut self) { self.state.deselect(); }
    pub fn resign(&mut self) { self.state.resign(); }
    pub fn roll_dice(&mut self) { self.state.roll_dice(); }
    pub fn leave_room(&mut self) { self.state.leave_room(); }

    pub fn room(&self) -> Option<String> { self.state.room().map(str::to_owned) }
    pub fn game_kind(&self) -> Option<String> {
        self.state.game_kind().map(|game| game_kind_name(game).to_owned())
    }
    pub fn my_force(&self) -> Option<String> {
        self.state.my_force().map(|force| force.to_wire_char().to_string())
    }
    pub fn turn(&self) -> Option<String> {
        self.state.chess_state().map(|state| state.turn.to_wire_char().to_string())
    }
    pub fn is_game_over(&self) -> bool { self.state.is_game_over() }

    // Ludo is drawn by the page from the raw snapshot.
    pub fn ludo_state(&self) -> Option<String> {
        self.state.ludo_state().map(|state| state.to_string())
    }

    // Piece code ("wP") or `undefined` for an empty square.
    pub fn square_piece(&self, row: u8, col: u8) -> JsResult<Option<String>> {
        let coord = to_coord(row, col)?;
        let Some(state) = self.state.chess_state() else {
            return Err(rust_error!("No chess game in progress"));
        };
        Ok(state.board[coord].map(|piece| piece.to_code()))
    }

    pub fn square_pictogram(&self, row: u8, col: u8) -> JsResult<String> {
        let coord = to_coord(row, col)?;
        let Some(state) = self.state.chess_state() else {
            return Err(rust_error!("No chess game in progress"));
        };
        Ok(state.board[coord].map(piece_to_pictogram).map(String::from).unwrap_or_default())
    }

    // CSS class, empty if the square is not highlighted.
    pub fn square_highlight(&self, row: u8, col: u8) -> JsResult<String> {
        let coord = to_coord(row, col)?;
        Ok(self.state.square_highlight(coord).css_class().to_owned())
    }

    pub fn square_shade(&self, row: u8, col: u8) -> JsResult<String> {
        let coord = to_coord(row, col)?;
        Ok(display::square_shade(coord).css_class().to_owned())
    }
}

fn to_coord(row: u8, col: u8) -> JsResult<Coord> {
    Coord::try_from_zero_based(row.into(), col.into())
        .ok_or_else(|| rust_error!("Square out of board: ({}, {})", row, col))
}

fn game_kind_name(game: GameKind) -> &'static str {
    match game {
        GameKind::Ludo => "ludo",
        GameKind::Chess => "chess",
    }
}
