//! Skirmish -- a turn-based tactics minigame over a line protocol.
//!
//! This binary reads adapter commands from stdin and writes responses to
//! stdout. A presentation layer (terminal, canvas, test harness) drives
//! the match by sending selection intents and reading state back.

use std::io::{self, BufRead};

use skirmish::protocol::parser::{parse_command, Command};
use skirmish::session::Session;

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Select { index } => {
                session.handle_select(index, &mut out);
            }
            Command::Target { x, y } => {
                session.handle_target(x, y, &mut out);
            }
            Command::Skill { armed } => {
                session.handle_skill(armed, &mut out);
            }
            Command::EndTurn => {
                session.handle_endturn(&mut out);
            }
            Command::State => {
                session.handle_state(&mut out);
            }
            Command::Board => {
                session.handle_board(&mut out);
            }
            Command::Log => {
                session.handle_log(&mut out);
            }
            Command::NewMatch => {
                session.handle_newmatch(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
