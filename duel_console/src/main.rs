#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod candidates_main;
mod tui;

use std::io;

use clap::{Command, arg};


fn main() -> io::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Duel")
        .version(clap::crate_version!())
        .about("Ludo/Chess duel client tools")
        .subcommand_required(true)
        .subcommand(
            Command::new("candidates")
                .about("Shows move candidates for a piece in a chess snapshot")
                .arg(arg!(<state_file> "Chess state JSON, or a full state_update event"))
                .arg(arg!(<square> "Square of the piece: algebraic (\"e2\") or \"row,col\""))
                .arg(arg!(--"sid" <sid> "Player sid; the piece must be theirs to be selectable")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("candidates", sub_matches)) => {
            candidates_main::run(candidates_main::CandidatesConfig {
                state_file: sub_matches.get_one::<String>("state_file").unwrap().clone(),
                square: sub_matches.get_one::<String>("square").unwrap().clone(),
                sid: sub_matches.get_one::<String>("sid").cloned(),
            })
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
