//! Command-line configuration

use clap::{Parser, ValueEnum};

/// Which presentation layer drives the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Frontend {
    /// Native window (egui)
    #[default]
    Gui,
    /// Line-oriented play on stdin/stdout
    Terminal,
}

/// Two-player freestyle Gomoku on a 15x15 board
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Presentation layer to start
    #[arg(short, long, value_enum, default_value_t = Frontend::Gui)]
    pub frontend: Frontend,

    /// Log filter (e.g. "info", "gomoku=debug"). Overrides RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Initial window width in points
    #[arg(long, default_value_t = 900.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 720.0)]
    pub height: f32,
}

impl Args {
    /// Log filter directive: explicit flag, then RUST_LOG, then "info"
    pub fn log_filter(&self) -> String {
        self.log_level
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| "info".to_string())
    }
}
