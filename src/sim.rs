//! Self-play match simulation.
//!
//! Plays complete matches without an interactive adapter: the player
//! side's action comes from a configurable policy, the opponent side is
//! the engine's own scripted reply, exactly as in a live match. Used for
//! balance checks and as JSONL fodder for offline analysis.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::state::{MatchState, SidePair};
use crate::board::unit::Side;
use crate::eval::greedy_action;
use crate::movegen::random_action;
use crate::resolve::resolve_turn;

/// The action source driving the player side of a simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// The same greedy evaluator the opponent uses.
    Greedy,
    /// Uniformly random legal actions; the exploration baseline.
    Random,
}

impl PolicyKind {
    /// Parses a policy from its CLI name.
    pub fn from_name(name: &str) -> Option<PolicyKind> {
        match name {
            "greedy" => Some(PolicyKind::Greedy),
            "random" => Some(PolicyKind::Random),
            _ => None,
        }
    }

    /// Returns the CLI/JSON name.
    pub const fn name(self) -> &'static str {
        match self {
            PolicyKind::Greedy => "greedy",
            PolicyKind::Random => "random",
        }
    }
}

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of matches to play.
    pub num_matches: usize,
    /// Action source for the player side.
    pub player_policy: PolicyKind,
    /// Random seed (0 = use entropy). Only the random policy consumes
    /// randomness; greedy batches are deterministic regardless.
    pub seed: u64,
    /// Number of parallel threads for concurrent matches.
    pub threads: usize,
    /// Suppress per-batch progress output.
    pub quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            num_matches: 100,
            player_policy: PolicyKind::Greedy,
            seed: 0,
            threads: 4,
            quiet: false,
        }
    }
}

/// The outcome of one simulated match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Sequential match ID within the batch.
    pub match_id: usize,
    /// The ruling. Always present: the turn cap guarantees a decision.
    pub winner: Option<Side>,
    /// Full turns resolved before the ruling.
    pub turns_played: u32,
    pub final_score: SidePair<u32>,
    /// Units still standing on each side at the end.
    pub units_left: SidePair<usize>,
}

/// Plays a single match to completion.
pub fn play_match(config: &SimConfig, match_id: usize, rng: &mut SmallRng) -> MatchRecord {
    let mut state = MatchState::new_match();
    while state.winner.is_none() {
        let action = match config.player_policy {
            PolicyKind::Greedy => greedy_action(&state, Side::Player),
            PolicyKind::Random => random_action(&state, Side::Player, rng),
        };
        resolve_turn(&mut state, action);
    }
    MatchRecord {
        match_id,
        winner: state.winner,
        turns_played: state.turn - 1,
        final_score: state.score,
        units_left: SidePair {
            player: state.units.player.len(),
            opponent: state.units.opponent.len(),
        },
    }
}

/// Runs a batch of matches, sequentially or on a rayon pool.
///
/// Per-match RNGs are derived from the configured seed so a batch is
/// reproducible independent of thread scheduling.
pub fn run_simulations(config: &SimConfig) -> Vec<MatchRecord> {
    if config.threads <= 1 {
        return (0..config.num_matches)
            .map(|i| {
                let mut rng = match_rng(config, i);
                play_match(config, i, &mut rng)
            })
            .collect();
    }

    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");
    pool.install(|| {
        (0..config.num_matches)
            .into_par_iter()
            .map(|i| {
                let mut rng = match_rng(config, i);
                play_match(config, i, &mut rng)
            })
            .collect()
    })
}

/// RNG for one match of the batch: entropy when the seed is 0, a
/// deterministic per-match derivation otherwise.
fn match_rng(config: &SimConfig, match_id: usize) -> SmallRng {
    if config.seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(config.seed.wrapping_add(match_id as u64))
    }
}

#[derive(Serialize)]
struct RecordView<'a> {
    match_id: usize,
    winner: Option<&'static str>,
    turns_played: u32,
    final_score: [u32; 2],
    units_left: [usize; 2],
    player_policy: &'a str,
}

/// Writes match records as JSONL (one JSON object per match, per line).
pub fn write_jsonl<W: Write>(
    config: &SimConfig,
    records: &[MatchRecord],
    out: &mut W,
) -> std::io::Result<()> {
    for record in records {
        let view = RecordView {
            match_id: record.match_id,
            winner: record.winner.map(Side::name),
            turns_played: record.turns_played,
            final_score: [record.final_score.player, record.final_score.opponent],
            units_left: [record.units_left.player, record.units_left.opponent],
            player_policy: config.player_policy.name(),
        };
        serde_json::to_writer(&mut *out, &view)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints aggregate batch statistics to stderr.
pub fn print_summary(records: &[MatchRecord]) {
    if records.is_empty() {
        eprintln!("no matches played");
        return;
    }
    let player_wins = records
        .iter()
        .filter(|r| r.winner == Some(Side::Player))
        .count();
    let opponent_wins = records
        .iter()
        .filter(|r| r.winner == Some(Side::Opponent))
        .count();
    let total_turns: u32 = records.iter().map(|r| r.turns_played).sum();
    eprintln!(
        "{} matches: player {} / opponent {} ({:.1}% player), avg {:.1} turns",
        records.len(),
        player_wins,
        opponent_wins,
        player_wins as f64 / records.len() as f64 * 100.0,
        total_turns as f64 / records.len() as f64,
    );
}
