//! Greedy destination scoring.
//!
//! The scripted opponent is a single-ply evaluator: for every (unit,
//! legal move) pair it computes a desirability score and takes the first
//! strictly-best pair. No lookahead, no randomness -- given a state, the
//! choice is fully determined by the fixed iteration order (roster order,
//! then the x-major move enumeration).

use crate::board::grid::{is_control_point, Cell};
use crate::board::state::MatchState;
use crate::board::unit::Side;
use crate::board::Action;
use crate::movegen::legal_moves;

/// Value of ending the turn on a control point.
pub const CONTROL_POINT_WEIGHT: i32 = 6;

/// Value of ending the turn on a cell an enemy occupies (an engage or
/// kill opportunity). The two observed tunings of this game disagree
/// between 7 and 8 here; this is a balance knob, not a rule.
pub const ENGAGE_WEIGHT: i32 = 8;

/// Proximity seeking decays to zero at this Manhattan distance.
pub const PROXIMITY_HORIZON: i32 = 3;

/// A winning candidate at or above this score arms the skill bonus.
pub const SKILL_THRESHOLD: i32 = 8;

/// Scores one candidate destination for the acting side.
///
/// Control points add a flat bonus; every enemy unit contributes the
/// engage bonus when it stands on the candidate cell, plus a proximity
/// term that rewards closing in. The proximity term sums over all enemy
/// units, not just the nearest.
pub fn desirability(state: &MatchState, side: Side, cell: Cell) -> i32 {
    let mut score = 0;
    if is_control_point(cell) {
        score += CONTROL_POINT_WEIGHT;
    }
    for enemy in state.units.get(side.opposite()) {
        if enemy.pos == cell {
            score += ENGAGE_WEIGHT;
        }
        score += (PROXIMITY_HORIZON - enemy.pos.distance(cell) as i32).max(0);
    }
    score
}

/// Picks the side's best action greedily: the first (unit, cell) pair
/// whose score strictly beats everything seen before it.
///
/// The skill flag is armed when the winning score reaches
/// [`SKILL_THRESHOLD`] and the chosen unit's skill is still available.
/// An empty roster yields a null action, which the resolver logs as
/// invalid and skips; that state is unreachable from a live match.
pub fn greedy_action(state: &MatchState, side: Side) -> Action {
    let mut best: Option<(i32, Action)> = None;
    for (unit_index, unit) in state.units.get(side).iter().enumerate() {
        for cell in legal_moves(unit) {
            let score = desirability(state, side, cell);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                let action = Action {
                    unit_index,
                    target: cell,
                    use_skill: score >= SKILL_THRESHOLD && !unit.skill_used,
                };
                best = Some((score, action));
            }
        }
    }
    match best {
        Some((_, action)) => action,
        None => Action::new(0, Cell::new(0, 0)),
    }
}
