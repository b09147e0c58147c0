//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game plus a CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}
