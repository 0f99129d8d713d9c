//! Turn resolution engine.
//!
//! Re-exports the resolution entry points.

pub mod turn;

pub use turn::{
    apply_action, cleanup_dead, evaluate_winner, resolve_turn, score_control_points,
    TEMPO_THRESHOLD,
};
