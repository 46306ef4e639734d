use std::{fs, io};

use duel_client::candidates::compute_candidates;
use duel_client::coord::parse_square;
use duel_client::event::{ChessState, ServerEvent};
use itertools::Itertools;
use log::{info, warn};

use crate::tui::render_grid;


pub struct CandidatesConfig {
    pub state_file: String,
    pub square: String,
    pub sid: Option<String>,
}

pub fn run(config: CandidatesConfig) -> io::Result<()> {
    let contents = fs::read_to_string(&config.state_file)?;
    let state = parse_chess_state(&contents).map_err(|err| {
        eprintln!("Error reading {}: {}", config.state_file, err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;
    let Some(origin) = parse_square(&config.square) else {
        eprintln!("Invalid square: {}", config.square);
        return Err(io::Error::from(io::ErrorKind::InvalidInput));
    };

    if let Some(sid) = &config.sid {
        match (state.color_of.get(sid), state.board[origin]) {
            (None, _) => warn!("{} is not playing this game", sid),
            (Some(&force), Some(piece)) if piece.force != force => {
                info!("{} plays {:?}; clicking {} would be ignored", sid, force, origin.to_algebraic())
            }
            _ => {}
        }
    }

    let candidates = compute_candidates(&state.board, origin);
    println!("{}", render_grid(&state.board, origin, &candidates));
    match state.board[origin] {
        None => println!("{} is empty", origin.to_algebraic()),
        Some(piece) => println!(
            "{} on {}: {}",
            piece,
            origin.to_algebraic(),
            if candidates.is_empty() {
                "no candidates".to_owned()
            } else {
                candidates.iter().map(|c| c.to_algebraic()).join(" ")
            }
        ),
    }
    Ok(())
}

// Accepts a bare snapshot or a `state_update` event as captured from the socket.
fn parse_chess_state(contents: &str) -> Result<ChessState, String> {
    let value: serde_json::Value = serde_json::from_str(contents).map_err(|err| err.to_string())?;
    let state = if value.get("event").is_some() {
        match serde_json::from_value(value).map_err(|err| err.to_string())? {
            ServerEvent::StateUpdate { state } => state,
            ServerEvent::StartAck { state, .. } => state,
            event => return Err(format!("event carries no chess state: {:?}", event)),
        }
    } else {
        value
    };
    serde_json::from_value(state).map_err(|err| format!("invalid chess state: {}", err))
}


#[cfg(test)]
mod tests {
    use duel_client::force::Force;

    use super::*;

    #[test]
    fn bare_state_and_event() {
        let board = r#"[["bR","","","","bK","","",""],
            ["","","","","","","",""], ["","","","","","","",""], ["","","","","","","",""],
            ["","","","","","","",""], ["","","","","","","",""], ["","","","","","","",""],
            ["","","","","wK","","","wR"]]"#;
        let bare = format!(r#"{{"board": {}, "turn": "w"}}"#, board);
        let state = parse_chess_state(&bare).unwrap();
        assert_eq!(state.turn, Force::White);
        assert_eq!(state.board.pieces().count(), 4);

        let event = format!(r#"{{"event": "state_update", "data": {{"state": {}}}}}"#, bare);
        assert_eq!(parse_chess_state(&event).unwrap(), state);

        let event = r#"{"event": "left_room", "data": {}}"#;
        assert!(parse_chess_state(event).is_err());
        assert!(parse_chess_state("{}").is_err());
    }
}
