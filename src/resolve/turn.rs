//! Turn resolution.
//!
//! Applies one action for each side, then cleanup, scoring, and win
//! evaluation. The step order is an invariant of the rules: reordering
//! cleanup, scoring, or the win check changes game balance. All mutation
//! of a live match funnels through [`resolve_turn`].

use crate::board::grid::CONTROL_POINTS;
use crate::board::state::{MatchState, MAX_TURNS, TARGET_SCORE};
use crate::board::unit::{Side, BOTH_SIDES};
use crate::board::Action;
use crate::eval::greedy_action;

/// Momentum at or above this grants a one-time +1 damage bonus, after
/// which the attacker's momentum resets to zero.
pub const TEMPO_THRESHOLD: u32 = 3;

/// Resolves one full turn: the player's action, then the opponent's
/// (chosen by the greedy policy), then cleanup, scoring, the turn
/// increment, and win evaluation.
///
/// A decided match is terminal: calling this after `winner` is set is a
/// silent no-op.
pub fn resolve_turn(state: &mut MatchState, player_action: Action) {
    if state.winner.is_some() {
        return;
    }

    state.log.push(None, format!("turn {} resolves", state.turn));
    apply_action(state, Side::Player, player_action);
    let reply = greedy_action(state, Side::Opponent);
    apply_action(state, Side::Opponent, reply);

    cleanup_dead(state);
    score_control_points(state);

    state.turn += 1;
    state.selection = None;
    evaluate_winner(state);
}

/// Applies a single side's action: movement first, then combat at the
/// actor's final cell.
///
/// An out-of-range unit index forfeits the side's step. A target beyond
/// the actor's range (or off the board) skips the move but not the
/// combat check -- the actor still fights whatever enemy shares its
/// unchanged cell.
pub fn apply_action(state: &mut MatchState, side: Side, action: Action) {
    if action.unit_index >= state.units.get(side).len() {
        state
            .log
            .push(Some(side), format!("{} issued an invalid action, skipped", side.name()));
        return;
    }

    let actor = &mut state.units.get_mut(side)[action.unit_index];
    if action.target.on_board() && actor.pos.distance(action.target) <= actor.move_range {
        actor.pos = action.target;
        let message = format!(
            "{} {} moved to ({}, {})",
            side.name(),
            actor.kind.name(),
            actor.pos.x,
            actor.pos.y
        );
        state.log.push(Some(side), message);
    } else {
        state
            .log
            .push(Some(side), format!("{} move out of range, unit holds", side.name()));
    }

    let actor = state.units.get(side)[action.unit_index];
    let enemy = side.opposite();
    let Some(defender_index) = state.unit_index_at(enemy, actor.pos) else {
        return;
    };

    let skill_bonus = action.use_skill && !actor.skill_used;
    let tempo_bonus = *state.momentum.get(side) >= TEMPO_THRESHOLD;
    let damage = actor.attack + i32::from(skill_bonus) + i32::from(tempo_bonus);

    state.units.get_mut(enemy)[defender_index].hp -= damage;
    if skill_bonus {
        state.units.get_mut(side)[action.unit_index].skill_used = true;
    }
    if tempo_bonus {
        *state.momentum.get_mut(side) = 0;
        state
            .log
            .push(Some(side), format!("{} momentum burst, +1 damage", side.name()));
    }
    state
        .log
        .push(Some(side), format!("{} dealt {} damage", side.name(), damage));
}

/// Removes every unit at or below zero hp, logging a per-side loss count
/// when any fall.
pub fn cleanup_dead(state: &mut MatchState) {
    for side in BOTH_SIDES {
        let units = state.units.get_mut(side);
        let before = units.len();
        units.retain(|u| u.hp > 0);
        let dead = before - units.len();
        if dead > 0 {
            state
                .log
                .push(Some(side), format!("{} lost {} unit(s)", side.name(), dead));
        }
    }
}

/// Awards one point of score and momentum per control point held by
/// exactly one side. Contested points (both sides present) award nobody.
pub fn score_control_points(state: &mut MatchState) {
    for point in CONTROL_POINTS {
        let player_holds = state.side_occupies(Side::Player, point);
        let opponent_holds = state.side_occupies(Side::Opponent, point);
        let sole_holder = match (player_holds, opponent_holds) {
            (true, false) => Some(Side::Player),
            (false, true) => Some(Side::Opponent),
            _ => None,
        };
        if let Some(side) = sole_holder {
            *state.score.get_mut(side) += 1;
            *state.momentum.get_mut(side) += 1;
            let message = format!("{} holds ({}, {}) +1", side.name(), point.x, point.y);
            state.log.push(Some(side), message);
        }
    }
}

/// Evaluates the win condition in strict priority order: eliminations
/// first, then the score threshold, then the turn cap (higher score wins,
/// ties favor the player).
///
/// Idempotent: a decided state is left untouched. The victory log entry
/// is written exactly once, when the winner is first set.
pub fn evaluate_winner(state: &mut MatchState) {
    if state.winner.is_some() {
        return;
    }

    let winner = if state.units.player.is_empty() {
        Some(Side::Opponent)
    } else if state.units.opponent.is_empty() {
        Some(Side::Player)
    } else if state.score.player >= TARGET_SCORE {
        Some(Side::Player)
    } else if state.score.opponent >= TARGET_SCORE {
        Some(Side::Opponent)
    } else if state.turn > MAX_TURNS {
        if state.score.player >= state.score.opponent {
            Some(Side::Player)
        } else {
            Some(Side::Opponent)
        }
    } else {
        None
    };

    if let Some(side) = winner {
        state.winner = Some(side);
        state
            .log
            .push(Some(side), format!("match over, {} wins", side.name()));
    }
}
