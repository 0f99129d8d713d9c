//! Opponent policy.
//!
//! Greedy single-ply evaluation of candidate destinations.

pub mod heuristic;

pub use heuristic::{
    desirability, greedy_action, CONTROL_POINT_WEIGHT, ENGAGE_WEIGHT, PROXIMITY_HORIZON,
    SKILL_THRESHOLD,
};
