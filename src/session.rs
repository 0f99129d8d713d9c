//! Interactive session management.
//!
//! Owns the single live `MatchState` and mediates between the adapter's
//! input intents (select a unit, pick a target, arm the skill, end the
//! turn) and the resolver. Selection is the only state an intent may
//! touch directly; everything else changes through `resolve_turn` or the
//! `new_match` factory. Handler methods write protocol responses for the
//! stdin/stdout loop in `main`.

use std::io::Write;

use crate::board::grid::{is_control_point, Cell, BOARD_SIZE};
use crate::board::state::{MatchState, PendingSelection};
use crate::board::unit::{Side, UnitKind};
use crate::board::Action;
use crate::protocol::snapshot::Snapshot;
use crate::resolve::resolve_turn;

/// Why an input intent was rejected. All of these are non-fatal: the
/// session reports a status line and the match continues unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("match is already decided")]
    MatchOver,

    #[error("unit index {0} is out of range")]
    UnitOutOfRange(usize),

    #[error("target ({0}, {1}) is off the board")]
    OffBoard(u8, u8),

    #[error("no unit selected")]
    NoUnitSelected,

    #[error("selection incomplete")]
    SelectionIncomplete,
}

/// Holds the mutable state of a play session between commands.
pub struct Session {
    state: MatchState,
}

impl Session {
    /// Creates a session with a fresh match.
    pub fn new() -> Session {
        Session {
            state: MatchState::new_match(),
        }
    }

    /// Read-only view of the current match.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Discards the match wholesale and starts a new one.
    pub fn restart(&mut self) {
        self.state = MatchState::new_match();
    }

    /// Selects the player unit to act this turn. Clears any previously
    /// chosen target.
    pub fn select_unit(&mut self, index: usize) -> Result<(), SelectionError> {
        if self.state.winner.is_some() {
            return Err(SelectionError::MatchOver);
        }
        if index >= self.state.units.player.len() {
            return Err(SelectionError::UnitOutOfRange(index));
        }
        self.state.selection = Some(PendingSelection {
            unit_index: index,
            target: None,
        });
        Ok(())
    }

    /// Sets the destination for the selected unit. Requires a unit to be
    /// selected first and the cell to be on the board.
    pub fn select_target(&mut self, x: u8, y: u8) -> Result<(), SelectionError> {
        if self.state.winner.is_some() {
            return Err(SelectionError::MatchOver);
        }
        let cell = Cell::new(x, y);
        if !cell.on_board() {
            return Err(SelectionError::OffBoard(x, y));
        }
        match self.state.selection.as_mut() {
            Some(selection) => {
                selection.target = Some(cell);
                Ok(())
            }
            None => Err(SelectionError::NoUnitSelected),
        }
    }

    /// Arms or disarms the one-shot skill bonus for the next end-turn.
    pub fn arm_skill(&mut self, armed: bool) {
        self.state.skill_armed = armed;
    }

    /// Resolves the turn from the pending selection. Requires both a
    /// unit and a target; rejected otherwise with no state change.
    pub fn end_turn(&mut self) -> Result<(), SelectionError> {
        if self.state.winner.is_some() {
            return Err(SelectionError::MatchOver);
        }
        let action = match self.state.selection {
            Some(PendingSelection {
                unit_index,
                target: Some(target),
            }) => Action {
                unit_index,
                target,
                use_skill: self.state.skill_armed,
            },
            _ => return Err(SelectionError::SelectionIncomplete),
        };
        resolve_turn(&mut self.state, action);
        Ok(())
    }

    /// Handles `select <index>`.
    pub fn handle_select<W: Write>(&mut self, index: usize, out: &mut W) {
        match self.select_unit(index) {
            Ok(()) => writeln!(out, "status selected unit {}", index).unwrap(),
            Err(e) => writeln!(out, "status {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles `target <x> <y>`.
    pub fn handle_target<W: Write>(&mut self, x: u8, y: u8, out: &mut W) {
        match self.select_target(x, y) {
            Ok(()) => writeln!(out, "status target ({}, {}) set", x, y).unwrap(),
            Err(e) => writeln!(out, "status {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles `skill on|off`.
    pub fn handle_skill<W: Write>(&mut self, armed: bool, out: &mut W) {
        self.arm_skill(armed);
        writeln!(out, "status skill {}", if armed { "armed" } else { "disarmed" }).unwrap();
        out.flush().unwrap();
    }

    /// Handles `endturn`: resolves the turn and reports the headline
    /// numbers the adapter needs to redraw.
    pub fn handle_endturn<W: Write>(&mut self, out: &mut W) {
        match self.end_turn() {
            Ok(()) => {
                writeln!(out, "status turn resolved").unwrap();
                self.write_summary(out);
            }
            Err(e) => writeln!(out, "status {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles `state`: one-line JSON snapshot of the whole match.
    pub fn handle_state<W: Write>(&self, out: &mut W) {
        let json = serde_json::to_string(&Snapshot::capture(&self.state))
            .expect("snapshot serialization cannot fail");
        writeln!(out, "state {}", json).unwrap();
        out.flush().unwrap();
    }

    /// Handles `board`: a plain ASCII rendering, one row per line.
    /// Player units are uppercase, opponent units lowercase, control
    /// points `*`, empty cells `.`.
    pub fn handle_board<W: Write>(&self, out: &mut W) {
        for y in 0..BOARD_SIZE {
            let mut row = String::new();
            for x in 0..BOARD_SIZE {
                let cell = Cell::new(x, y);
                let glyph = if let Some(unit) = self.state.unit_at(Side::Player, cell) {
                    match unit.kind {
                        UnitKind::Scout => 'S',
                        UnitKind::Bruiser => 'B',
                    }
                } else if let Some(unit) = self.state.unit_at(Side::Opponent, cell) {
                    match unit.kind {
                        UnitKind::Scout => 's',
                        UnitKind::Bruiser => 'b',
                    }
                } else if is_control_point(cell) {
                    '*'
                } else {
                    '.'
                };
                if x > 0 {
                    row.push(' ');
                }
                row.push(glyph);
            }
            writeln!(out, "board {}", row).unwrap();
        }
        out.flush().unwrap();
    }

    /// Handles `log`: the rolling event log, newest first.
    pub fn handle_log<W: Write>(&self, out: &mut W) {
        for entry in self.state.log.entries() {
            writeln!(out, "event {}", entry.message).unwrap();
        }
        out.flush().unwrap();
    }

    /// Handles `newmatch`.
    pub fn handle_newmatch<W: Write>(&mut self, out: &mut W) {
        self.restart();
        writeln!(out, "status new match").unwrap();
        self.write_summary(out);
        out.flush().unwrap();
    }

    fn write_summary<W: Write>(&self, out: &mut W) {
        let state = &self.state;
        writeln!(out, "turn {}", state.turn).unwrap();
        writeln!(out, "score {} {}", state.score.player, state.score.opponent).unwrap();
        writeln!(
            out,
            "momentum {} {}",
            state.momentum.player, state.momentum.opponent
        )
        .unwrap();
        match state.winner {
            Some(side) => writeln!(out, "winner {}", side.name()).unwrap(),
            None => writeln!(out, "winner none").unwrap(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
