use std::sync::mpsc;

use log::{debug, info, warn};

use crate::candidates::compute_candidates;
use crate::coord::Coord;
use crate::display::{self, SquareHighlight};
use crate::event::{ChessState, ClientEvent, GameKind, PlayerInRoom, ServerEvent};
use crate::force::Force;


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NotableEvent {
    GameStarted(GameKind),
    StateUpdated,
    MoveRejected(String),
    DiceRolled(u8),
    GameOver { winner_name: String, i_won: bool },
    SecretRevealed(String),
    LeftRoom,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EventError {
    CannotApplyEvent(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickError {
    NoChessGame,
    GameOver,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ClickOutcome {
    // Empty square or somebody else's piece with nothing selected.
    Ignored,
    Selected { candidates: Vec<Coord> },
    MoveSubmitted { from: Coord, to: Coord },
}

// A piece picked by the first click, waiting for the destination click.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Selection {
    pub origin: Coord,
    pub candidates: Vec<Coord>,
}

#[derive(Clone, Debug)]
pub enum GameState {
    // Ludo is rendered by the page directly; the snapshot is only passed through.
    Ludo {
        state: serde_json::Value,
    },
    Chess {
        state: ChessState,
        selection: Option<Selection>,
    },
}

#[derive(Clone, Debug)]
pub enum ContestState {
    Idle,
    Game {
        room: String,
        players: Vec<PlayerInRoom>,
        game: GameState,
        winner_sid: Option<String>,
    },
}

pub struct ClientState {
    my_sid: String,
    events_tx: mpsc::Sender<ClientEvent>,
    contest_state: ContestState,
}

impl ClientState {
    pub fn new(my_sid: String, events_tx: mpsc::Sender<ClientEvent>) -> Self {
        ClientState {
            my_sid,
            events_tx,
            contest_state: ContestState::Idle,
        }
    }

    pub fn my_sid(&self) -> &str { &self.my_sid }
    pub fn contest_state(&self) -> &ContestState { &self.contest_state }

    pub fn room(&self) -> Option<&str> {
        match &self.contest_state {
            ContestState::Idle => None,
            ContestState::Game { room, .. } => Some(room),
        }
    }

    pub fn game_kind(&self) -> Option<GameKind> {
        match &self.contest_state {
            ContestState::Idle => None,
            ContestState::Game { game: GameState::Ludo { .. }, .. } => Some(GameKind::Ludo),
            ContestState::Game { game: GameState::Chess { .. }, .. } => Some(GameKind::Chess),
        }
    }

    pub fn chess_state(&self) -> Option<&ChessState> {
        match &self.contest_state {
            ContestState::Game { game: GameState::Chess { state, .. }, .. } => Some(state),
            _ => None,
        }
    }

    pub fn ludo_state(&self) -> Option<&serde_json::Value> {
        match &self.contest_state {
            ContestState::Game { game: GameState::Ludo { state }, .. } => Some(state),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.contest_state {
            ContestState::Game { game: GameState::Chess { selection, .. }, .. } => {
                selection.as_ref()
            }
            _ => None,
        }
    }

    // `None` for spectators and outside of a chess game.
    pub fn my_force(&self) -> Option<Force> {
        self.chess_state().and_then(|state| state.color_of.get(&self.my_sid).copied())
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.contest_state, ContestState::Game { winner_sid: Some(_), .. })
    }

    pub fn square_highlight(&self, coord: Coord) -> SquareHighlight {
        match self.selection() {
            Some(selection) => {
                display::square_highlight(selection.origin, &selection.candidates, coord)
            }
            None => SquareHighlight::None,
        }
    }

    pub fn process_server_event(&mut self, event: ServerEvent) -> Result<NotableEvent, EventError> {
        use ServerEvent::*;
        match event {
            StartAck { code, state, players, game } => {
                let game_state = match game {
                    GameKind::Ludo => GameState::Ludo { state },
                    GameKind::Chess => GameState::Chess {
                        state: decode_chess_state(state)?,
                        selection: None,
                    },
                };
                info!("Game started in room {}: {:?}", code, game);
                self.contest_state = ContestState::Game {
                    room: code,
                    players,
                    game: game_state,
                    winner_sid: None,
                };
                Ok(NotableEvent::GameStarted(game))
            }
            StateUpdate { state: new_state } => {
                let ContestState::Game { ref mut game, .. } = self.contest_state else {
                    return Err(EventError::CannotApplyEvent(
                        "Cannot apply state update: no game in progress".to_owned(),
                    ));
                };
                match game {
                    GameState::Ludo { state } => {
                        *state = new_state;
                    }
                    GameState::Chess { state, selection } => {
                        *state = decode_chess_state(new_state)?;
                        if selection.take().is_some() {
                            debug!("Selection dropped: board snapshot replaced");
                        }
                    }
                }
                Ok(NotableEvent::StateUpdated)
            }
            IllegalMove { msg } | NotYourTurn { msg } | InvalidMove { msg } | NoDice { msg } => {
                Ok(NotableEvent::MoveRejected(msg))
            }
            DiceResult { val } => Ok(NotableEvent::DiceRolled(val)),
            GameOver { winner_sid, winner_name } => {
                let ContestState::Game { winner_sid: ref mut winner, .. } = self.contest_state
                else {
                    return Err(EventError::CannotApplyEvent(
                        "Cannot record game result: no game in progress".to_owned(),
                    ));
                };
                let i_won = winner_sid == self.my_sid;
                *winner = Some(winner_sid);
                info!("Game over, winner: {}", winner_name);
                Ok(NotableEvent::GameOver { winner_name, i_won })
            }
            RevealSecret { secret } => Ok(NotableEvent::SecretRevealed(secret)),
            LeftRoom {} => {
                self.contest_state = ContestState::Idle;
                Ok(NotableEvent::LeftRoom)
            }
        }
    }

    // First click on one of my pieces selects it; the next click anywhere sends the move.
    // The destination is not checked against the candidates: the server decides.
    pub fn click(&mut self, coord: Coord) -> Result<ClickOutcome, ClickError> {
        let my_force = self.my_force();
        let ContestState::Game { ref room, ref mut game, ref winner_sid, .. } = self.contest_state
        else {
            return Err(ClickError::NoChessGame);
        };
        let GameState::Chess { ref state, ref mut selection } = *game else {
            return Err(ClickError::NoChessGame);
        };
        if winner_sid.is_some() {
            return Err(ClickError::GameOver);
        }
        match selection.take() {
            None => {
                let Some(piece) = state.board[coord] else {
                    return Ok(ClickOutcome::Ignored);
                };
                if Some(piece.force) != my_force {
                    return Ok(ClickOutcome::Ignored);
                }
                let candidates = compute_candidates(&state.board, coord);
                debug!("Selected {:?}, {} candidates", coord, candidates.len());
                *selection = Some(Selection { origin: coord, candidates: candidates.clone() });
                Ok(ClickOutcome::Selected { candidates })
            }
            Some(Selection { origin, .. }) => {
                let event = ClientEvent::ChessMove { room: room.clone(), from: origin, to: coord };
                send_event(&self.events_tx, event);
                Ok(ClickOutcome::MoveSubmitted { from: origin, to: coord })
            }
        }
    }

    pub fn deselect(&mut self) {
        if let ContestState::Game { game: GameState::Chess { ref mut selection, .. }, .. } =
            self.contest_state
        {
            *selection = None;
        }
    }

    pub fn resign(&mut self) {
        if let Some(room) = self.room() {
            let event = ClientEvent::Resign { room: room.to_owned() };
            send_event(&self.events_tx, event);
        }
    }

    // Ludo only; the roll itself comes back as `dice_result`.
    pub fn roll_dice(&mut self) {
        if self.game_kind() == Some(GameKind::Ludo) {
            if let Some(room) = self.room() {
                let event = ClientEvent::RollDice { room: room.to_owned() };
                send_event(&self.events_tx, event);
            }
        }
    }

    // The room is left once the server confirms with `left_room`.
    pub fn leave_room(&mut self) {
        if let Some(room) = self.room() {
            let event = ClientEvent::LeaveRoom { room: room.to_owned() };
            send_event(&self.events_tx, event);
        }
    }
}

fn decode_chess_state(state: serde_json::Value) -> Result<ChessState, EventError> {
    serde_json::from_value(state)
        .map_err(|err| EventError::CannotApplyEvent(format!("Invalid chess state: {}", err)))
}

// The receiving side belongs to the frontend; if it is gone there is nobody to report to.
fn send_event(events_tx: &mpsc::Sender<ClientEvent>, event: ClientEvent) {
    if let Err(err) = events_tx.send(event) {
        warn!("Dropping outgoing event {:?}: receiver disconnected", err.0);
    }
}
