use std::path::PathBuf;

use clap::Parser;

/// Tic-tac-toe with a time-travelling move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version)]
pub struct Args {
    /// Replay comma-separated cell indices (0-8, row-major) and print the result instead of starting the UI
    #[arg(long, value_delimiter = ',', value_name = "CELLS")]
    pub moves: Option<Vec<usize>>,

    /// Print the replay result as JSON
    #[arg(long, requires = "moves")]
    pub json: bool,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Directory for log files (defaults to the platform data directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
