//! JSON snapshot of the match state.
//!
//! A structured, read-only view of everything an adapter needs to draw a
//! frame: rosters, score, momentum, selection, and the rolling log. The
//! view is rebuilt from the `MatchState` on demand; nothing here can
//! mutate the match.

use serde::Serialize;

use crate::board::state::{MatchState, PendingSelection};
use crate::board::unit::{Side, Unit};

/// Per-side pair in snapshot form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairView<T> {
    pub player: T,
    pub opponent: T,
}

/// One unit in snapshot form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitView {
    pub kind: &'static str,
    pub hp: i32,
    pub attack: i32,
    pub move_range: u32,
    pub pos: [u8; 2],
    pub skill_used: bool,
}

impl From<&Unit> for UnitView {
    fn from(unit: &Unit) -> UnitView {
        UnitView {
            kind: unit.kind.name(),
            hp: unit.hp,
            attack: unit.attack,
            move_range: unit.move_range,
            pos: [unit.pos.x, unit.pos.y],
            skill_used: unit.skill_used,
        }
    }
}

/// The pending selection in snapshot form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub unit_index: usize,
    pub target: Option<[u8; 2]>,
}

/// One log entry in snapshot form, newest first in the containing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogView {
    pub message: String,
    pub side: Option<&'static str>,
}

/// Complete snapshot of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub turn: u32,
    pub winner: Option<&'static str>,
    pub score: PairView<u32>,
    pub momentum: PairView<u32>,
    pub units: PairView<Vec<UnitView>>,
    pub selection: Option<SelectionView>,
    pub skill_armed: bool,
    pub log: Vec<LogView>,
}

impl Snapshot {
    /// Builds a snapshot of the given state.
    pub fn capture(state: &MatchState) -> Snapshot {
        Snapshot {
            turn: state.turn,
            winner: state.winner.map(Side::name),
            score: PairView {
                player: state.score.player,
                opponent: state.score.opponent,
            },
            momentum: PairView {
                player: state.momentum.player,
                opponent: state.momentum.opponent,
            },
            units: PairView {
                player: state.units.player.iter().map(UnitView::from).collect(),
                opponent: state.units.opponent.iter().map(UnitView::from).collect(),
            },
            selection: state.selection.map(
                |PendingSelection { unit_index, target }| SelectionView {
                    unit_index,
                    target: target.map(|c| [c.x, c.y]),
                },
            ),
            skill_armed: state.skill_armed,
            log: state
                .log
                .entries()
                .map(|e| LogView {
                    message: e.message.clone(),
                    side: e.side.map(Side::name),
                })
                .collect(),
        }
    }
}
