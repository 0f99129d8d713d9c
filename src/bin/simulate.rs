//! Batch simulation CLI.
//!
//! Plays matches between a player-side policy and the built-in opponent
//! and outputs one JSON record per match.
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --matches N       Number of matches to play (default: 100)
//!   --policy NAME     Player-side policy: greedy or random (default: greedy)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --threads N       Number of parallel threads (default: 4)
//!   --output FILE     Output file path (default: stdout)
//!   --quiet           Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use skirmish::sim::{self, PolicyKind, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SimConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--matches" => {
                i += 1;
                config.num_matches = args[i].parse().expect("invalid --matches value");
            }
            "--policy" => {
                i += 1;
                config.player_policy =
                    PolicyKind::from_name(&args[i]).expect("invalid --policy value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let start = Instant::now();
    let records = sim::run_simulations(&config);
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Simulated {} matches ({} player policy) in {:.2}s",
            records.len(),
            config.player_policy.name(),
            elapsed.as_secs_f64(),
        );
        sim::print_summary(&records);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            sim::write_jsonl(&config, &records, &mut writer).expect("failed to write output");
            if !config.quiet {
                eprintln!("Wrote {} records to {}", records.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            sim::write_jsonl(&config, &records, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: simulate [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --matches N      Number of matches to play (default: 100)");
    eprintln!("  --policy NAME    Player-side policy: greedy or random (default: greedy)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress summary output");
    eprintln!("  --help           Show this help");
}
