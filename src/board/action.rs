//! The action type.
//!
//! One action per side per turn: a unit index and a destination, with an
//! optional skill flag. Movement and combat are a single atomic step --
//! if an enemy occupies the destination after movement resolves, an attack
//! follows automatically. There is no separate attack-only action.

use super::grid::Cell;

/// A side's chosen action for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    /// Index into the acting side's roster. Out-of-range indices forfeit
    /// the side's step for the turn (logged, never fatal).
    pub unit_index: usize,
    /// The destination cell. Combat resolves against whatever enemy ends
    /// up sharing the actor's final cell.
    pub target: Cell,
    /// Requests the one-shot +1 damage bonus if the actor still has it.
    pub use_skill: bool,
}

impl Action {
    /// Creates an action without the skill flag.
    pub const fn new(unit_index: usize, target: Cell) -> Action {
        Action {
            unit_index,
            target,
            use_skill: false,
        }
    }

    /// Creates an action with the skill flag set.
    pub const fn with_skill(unit_index: usize, target: Cell) -> Action {
        Action {
            unit_index,
            target,
            use_skill: true,
        }
    }
}
