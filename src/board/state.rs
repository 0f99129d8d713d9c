//! Match state representation.
//!
//! Holds the complete snapshot of a match at a given point in time: the
//! turn counter, both rosters, score and momentum, the pending selection,
//! and the bounded event log. The state is owned by exactly one driver
//! (the interactive session or the simulation loop) and every mutation
//! goes through the resolver or the `new_match` factory.

use std::collections::VecDeque;

use super::grid::Cell;
use super::unit::{Side, Unit, UnitKind};

/// A match ends in a turn-cap ruling after this many full turns.
pub const MAX_TURNS: u32 = 12;

/// First side to reach this score wins outright.
pub const TARGET_SCORE: u32 = 6;

/// Number of log entries retained, newest first.
pub const LOG_CAPACITY: usize = 16;

/// Per-side storage addressed by [`Side`].
///
/// The two fields play the role the teacher of this pattern gives to
/// fixed-size arrays indexed by an enum: O(1) access, no heap beyond the
/// payload, and an explicit split for acting-side/enemy-side borrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidePair<T> {
    pub player: T,
    pub opponent: T,
}

impl<T> SidePair<T> {
    /// Returns the value for a side.
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Returns the value for a side, mutably.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}

/// One entry in the rolling match log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    /// The side the entry concerns, if any; used by adapters for styling.
    pub side: Option<Side>,
}

/// Bounded event log, newest entry first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchLog {
    entries: VecDeque<LogEntry>,
}

impl MatchLog {
    /// Creates an empty log.
    pub fn new() -> MatchLog {
        MatchLog {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }

    /// Prepends an entry, discarding the oldest once the capacity is hit.
    pub fn push(&mut self, side: Option<Side>, message: impl Into<String>) {
        self.entries.push_front(LogEntry {
            message: message.into(),
            side,
        });
        self.entries.truncate(LOG_CAPACITY);
    }

    /// Iterates entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A partially or fully formed selection: the unit is chosen first, the
/// target afterwards. End-turn requires both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    pub unit_index: usize,
    pub target: Option<Cell>,
}

/// Complete match state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    /// Current turn, starting at 1. Increments only after a full turn
    /// (both actions, cleanup, scoring) resolves.
    pub turn: u32,
    /// Set at most once; terminal once set.
    pub winner: Option<Side>,
    pub score: SidePair<u32>,
    /// Builds by holding control points; spent on tempo bonuses.
    pub momentum: SidePair<u32>,
    /// Rosters in spawn order. Units are only ever removed.
    pub units: SidePair<Vec<Unit>>,
    /// The player's in-progress selection; cleared every resolved turn.
    pub selection: Option<PendingSelection>,
    /// Whether the next player action requests the one-shot skill bonus.
    pub skill_armed: bool,
    pub log: MatchLog,
}

impl MatchState {
    /// Creates a fresh match with the fixed opening layout: the player
    /// fields a scout at (0,0) and a bruiser at (0,1), the opponent a
    /// scout at (4,4) and a bruiser at (4,3).
    pub fn new_match() -> MatchState {
        MatchState {
            turn: 1,
            winner: None,
            score: SidePair::default(),
            momentum: SidePair::default(),
            units: SidePair {
                player: vec![
                    Unit::spawn(Side::Player, UnitKind::Scout, Cell::new(0, 0)),
                    Unit::spawn(Side::Player, UnitKind::Bruiser, Cell::new(0, 1)),
                ],
                opponent: vec![
                    Unit::spawn(Side::Opponent, UnitKind::Scout, Cell::new(4, 4)),
                    Unit::spawn(Side::Opponent, UnitKind::Bruiser, Cell::new(4, 3)),
                ],
            },
            selection: None,
            skill_armed: false,
            log: MatchLog::new(),
        }
    }

    /// First unit of `side` occupying `cell`, in roster order.
    ///
    /// Stacking is not normally reachable for a single side, but when it
    /// happens the roster order makes the answer deterministic.
    pub fn unit_at(&self, side: Side, cell: Cell) -> Option<&Unit> {
        self.units.get(side).iter().find(|u| u.pos == cell)
    }

    /// Roster index of the first unit of `side` occupying `cell`.
    pub fn unit_index_at(&self, side: Side, cell: Cell) -> Option<usize> {
        self.units.get(side).iter().position(|u| u.pos == cell)
    }

    /// Returns true if any unit of `side` occupies `cell`.
    pub fn side_occupies(&self, side: Side, cell: Cell) -> bool {
        self.unit_at(side, cell).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_pair_addressing() {
        let mut pair = SidePair {
            player: 1u32,
            opponent: 2u32,
        };
        assert_eq!(*pair.get(Side::Player), 1);
        assert_eq!(*pair.get(Side::Opponent), 2);
        *pair.get_mut(Side::Opponent) += 1;
        assert_eq!(pair.opponent, 3);
    }

    #[test]
    fn log_is_newest_first() {
        let mut log = MatchLog::new();
        log.push(None, "first");
        log.push(Some(Side::Player), "second");
        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn log_truncates_at_capacity() {
        let mut log = MatchLog::new();
        for i in 0..LOG_CAPACITY + 5 {
            log.push(None, format!("entry {}", i));
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        // The newest entry survives, the oldest five are gone.
        assert_eq!(
            log.entries().next().unwrap().message,
            format!("entry {}", LOG_CAPACITY + 4)
        );
        assert!(log.entries().all(|e| e.message != "entry 0"));
    }

    #[test]
    fn new_match_opening_layout() {
        let state = MatchState::new_match();
        assert_eq!(state.turn, 1);
        assert_eq!(state.winner, None);
        assert_eq!(state.score, SidePair::default());
        assert_eq!(state.momentum, SidePair::default());
        assert!(state.selection.is_none());
        assert!(!state.skill_armed);
        assert!(state.log.is_empty());

        let player = &state.units.player;
        assert_eq!(player.len(), 2);
        assert_eq!(player[0].kind, UnitKind::Scout);
        assert_eq!(player[0].pos, Cell::new(0, 0));
        assert_eq!(player[1].kind, UnitKind::Bruiser);
        assert_eq!(player[1].pos, Cell::new(0, 1));

        let opponent = &state.units.opponent;
        assert_eq!(opponent.len(), 2);
        assert_eq!(opponent[0].kind, UnitKind::Scout);
        assert_eq!(opponent[0].pos, Cell::new(4, 4));
        assert_eq!(opponent[1].kind, UnitKind::Bruiser);
        assert_eq!(opponent[1].pos, Cell::new(4, 3));
    }

    #[test]
    fn unit_at_finds_occupant() {
        let state = MatchState::new_match();
        let unit = state.unit_at(Side::Player, Cell::new(0, 1)).unwrap();
        assert_eq!(unit.kind, UnitKind::Bruiser);
        assert!(state.unit_at(Side::Player, Cell::new(2, 2)).is_none());
        assert!(state.unit_at(Side::Opponent, Cell::new(0, 0)).is_none());
    }

    #[test]
    fn unit_index_at_prefers_roster_order() {
        let mut state = MatchState::new_match();
        // Stack both player units on one cell; the scout (index 0) wins.
        state.units.player[1].pos = Cell::new(0, 0);
        assert_eq!(state.unit_index_at(Side::Player, Cell::new(0, 0)), Some(0));
    }

    #[test]
    fn restart_discards_previous_state() {
        let mut state = MatchState::new_match();
        state.turn = 9;
        state.score.player = 5;
        state.units.opponent.clear();
        state.log.push(None, "stale");

        state = MatchState::new_match();
        assert_eq!(state.turn, 1);
        assert_eq!(state.score.player, 0);
        assert_eq!(state.units.opponent.len(), 2);
        assert!(state.log.is_empty());
    }
}
