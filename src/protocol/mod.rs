//! Adapter-facing protocol.
//!
//! Line-command parsing and the JSON state snapshot.

pub mod parser;
pub mod snapshot;

pub use parser::{parse_command, Command};
pub use snapshot::Snapshot;
