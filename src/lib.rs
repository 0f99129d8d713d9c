//! Skirmish engine library.
//!
//! A 5x5 turn-based tactics minigame: two units a side, control points
//! worth score and momentum, a scripted greedy opponent. Exposes the
//! board representation, turn resolver, opponent policy, session layer,
//! and adapter protocol for use by integration tests and the binaries.

pub mod board;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod session;
pub mod sim;
