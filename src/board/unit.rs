//! Unit types and ownership.
//!
//! Each side fields two units, spawned once at match start from a fixed
//! archetype table and only ever removed. Roster order is significant:
//! actions address units by index.

use super::grid::Cell;

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

/// Both sides, in the order turn resolution visits them.
pub const BOTH_SIDES: [Side; 2] = [Side::Player, Side::Opponent];

impl Side {
    /// Returns the other side.
    pub const fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Returns the lowercase name used in protocol output and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// The archetype of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Fast and fragile: hp 6, attack 2, move 2.
    Scout,
    /// Slow and sturdy: hp 10, attack 3, move 1.
    Bruiser,
}

impl UnitKind {
    /// Returns the lowercase name used in protocol output and logs.
    pub const fn name(self) -> &'static str {
        match self {
            UnitKind::Scout => "scout",
            UnitKind::Bruiser => "bruiser",
        }
    }
}

/// A unit on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub owner: Side,
    pub kind: UnitKind,
    /// May go negative transiently; cleanup removes units at or below zero.
    pub hp: i32,
    pub attack: i32,
    pub move_range: u32,
    pub pos: Cell,
    /// Latches true when the one-shot skill bonus is consumed.
    pub skill_used: bool,
}

impl Unit {
    /// Spawns a unit with its archetype's starting stats.
    pub const fn spawn(owner: Side, kind: UnitKind, pos: Cell) -> Unit {
        let (hp, attack, move_range) = match kind {
            UnitKind::Scout => (6, 2, 2),
            UnitKind::Bruiser => (10, 3, 1),
        };
        Unit {
            owner,
            kind,
            hp,
            attack,
            move_range,
            pos,
            skill_used: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_swaps_sides() {
        assert_eq!(Side::Player.opposite(), Side::Opponent);
        assert_eq!(Side::Opponent.opposite(), Side::Player);
    }

    #[test]
    fn side_names() {
        assert_eq!(Side::Player.name(), "player");
        assert_eq!(Side::Opponent.name(), "opponent");
    }

    #[test]
    fn scout_stats() {
        let unit = Unit::spawn(Side::Player, UnitKind::Scout, Cell::new(0, 0));
        assert_eq!(unit.hp, 6);
        assert_eq!(unit.attack, 2);
        assert_eq!(unit.move_range, 2);
        assert!(!unit.skill_used);
    }

    #[test]
    fn bruiser_stats() {
        let unit = Unit::spawn(Side::Opponent, UnitKind::Bruiser, Cell::new(4, 3));
        assert_eq!(unit.hp, 10);
        assert_eq!(unit.attack, 3);
        assert_eq!(unit.move_range, 1);
        assert_eq!(unit.owner, Side::Opponent);
        assert_eq!(unit.pos, Cell::new(4, 3));
    }
}
