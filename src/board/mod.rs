//! Board representation and match-state types.
//!
//! Contains the core data structures for the grid, units, actions, and
//! the overall match state.

pub mod action;
pub mod grid;
pub mod state;
pub mod unit;

pub use action::Action;
pub use grid::{is_control_point, Cell, BOARD_SIZE, CONTROL_POINTS};
pub use state::{
    LogEntry, MatchLog, MatchState, PendingSelection, SidePair, LOG_CAPACITY, MAX_TURNS,
    TARGET_SCORE,
};
pub use unit::{Side, Unit, UnitKind, BOTH_SIDES};
