//! Move generation.
//!
//! Enumerates the destinations a unit may legally reach and provides a
//! random action source used as a simulation baseline. Legality is pure
//! geometry: any board cell within the unit's Manhattan move range
//! qualifies, including the cell it already stands on. Occupancy is
//! resolved at action-application time, not here.

use rand::Rng;

use crate::board::grid::{Cell, BOARD_SIZE};
use crate::board::state::MatchState;
use crate::board::unit::{Side, Unit};
use crate::board::Action;

/// All cells the unit can move to this turn, enumerated x-major then
/// y-minor. The fixed order is load-bearing: the greedy policy breaks
/// ties by first occurrence.
pub fn legal_moves(unit: &Unit) -> Vec<Cell> {
    let mut moves = Vec::new();
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            let cell = Cell::new(x, y);
            if unit.pos.distance(cell) <= unit.move_range {
                moves.push(cell);
            }
        }
    }
    moves
}

/// Picks a uniformly random action for the side: a random roster index,
/// a random legal destination, and a fair-coin skill flag.
///
/// Falls back to a null action when the side has no units left; the
/// resolver logs that as an invalid action and skips the step.
pub fn random_action(state: &MatchState, side: Side, rng: &mut impl Rng) -> Action {
    let units = state.units.get(side);
    if units.is_empty() {
        return Action::new(0, Cell::new(0, 0));
    }
    let unit_index = rng.gen_range(0..units.len());
    let moves = legal_moves(&units[unit_index]);
    let target = moves[rng.gen_range(0..moves.len())];
    Action {
        unit_index,
        target,
        use_skill: rng.gen_bool(0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::unit::UnitKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn scout_at(x: u8, y: u8) -> Unit {
        Unit::spawn(Side::Player, UnitKind::Scout, Cell::new(x, y))
    }

    fn bruiser_at(x: u8, y: u8) -> Unit {
        Unit::spawn(Side::Player, UnitKind::Bruiser, Cell::new(x, y))
    }

    #[test]
    fn legal_moves_are_exactly_the_cells_in_range() {
        let unit = scout_at(2, 2);
        let moves = legal_moves(&unit);
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let cell = Cell::new(x, y);
                let in_range = unit.pos.distance(cell) <= unit.move_range;
                assert_eq!(moves.contains(&cell), in_range, "cell {:?}", cell);
            }
        }
    }

    #[test]
    fn legal_moves_include_the_origin() {
        let unit = bruiser_at(3, 3);
        assert!(legal_moves(&unit).contains(&Cell::new(3, 3)));
    }

    #[test]
    fn legal_moves_never_leave_the_board() {
        // A corner scout's diamond is clipped by two board edges.
        let unit = scout_at(0, 0);
        let moves = legal_moves(&unit);
        assert!(moves.iter().all(|c| c.on_board()));
        // (0,0) (0,1) (0,2) (1,0) (1,1) (2,0)
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn legal_moves_bruiser_interior() {
        // Move 1 from an interior cell: the origin plus four neighbors.
        let moves = legal_moves(&bruiser_at(2, 2));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn legal_moves_order_is_x_major_y_minor() {
        let moves = legal_moves(&bruiser_at(1, 1));
        assert_eq!(
            moves,
            vec![
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(2, 1),
            ]
        );
    }

    #[test]
    fn legal_moves_ignore_occupancy() {
        let state = MatchState::new_match();
        // The player scout at (0,0) can enter (0,1) even though the
        // bruiser stands there.
        let moves = legal_moves(&state.units.player[0]);
        assert!(moves.contains(&Cell::new(0, 1)));
    }

    #[test]
    fn random_action_is_legal() {
        let state = MatchState::new_match();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let action = random_action(&state, Side::Player, &mut rng);
            let unit = &state.units.player[action.unit_index];
            assert!(action.target.on_board());
            assert!(unit.pos.distance(action.target) <= unit.move_range);
        }
    }

    #[test]
    fn random_action_empty_roster_falls_back() {
        let mut state = MatchState::new_match();
        state.units.player.clear();
        let mut rng = SmallRng::seed_from_u64(7);
        let action = random_action(&state, Side::Player, &mut rng);
        assert_eq!(action, Action::new(0, Cell::new(0, 0)));
    }
}
