use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for city-picker
#[derive(Debug, Parser)]
#[command(
    name = "city-picker",
    version,
    about = "Drive the city picker's search, alphabet index and selection from a terminal"
)]
pub struct CliArgs {
    /// Path to a city dataset (.json or .json.gz); defaults to the bundled sample
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity (written to stderr)
    #[arg(long = "log-level", global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List the alphabet index in display order
    Letters,

    /// List the hot cities
    Hot,

    /// List the cities under one letter
    Group {
        /// Group key (e.g. B)
        letter: String,
    },

    /// Type one or more queries as a single burst and print the final results
    Search {
        /// Successive contents of the search box (case-sensitive)
        #[arg(required = true)]
        queries: Vec<String>,

        /// Milliseconds between keystrokes
        #[arg(long = "interval", default_value_t = 50)]
        interval_ms: u64,
    },

    /// Drag a finger along the alphabet column and print the letters it hits
    Touch {
        /// Vertical offset of the first letter
        #[arg(long = "baseline", default_value_t = 0.0)]
        baseline: f32,

        /// Height of one letter row
        #[arg(long = "height", default_value_t = 20.0)]
        height: f32,

        /// Milliseconds between pointer samples
        #[arg(long = "interval", default_value_t = 20)]
        interval_ms: u64,

        /// Pointer positions, in order
        #[arg(required = true, allow_negative_numbers = true)]
        pointer_y: Vec<f32>,
    },

    /// Select a city by name and print the selected-city store
    Select {
        /// Exact city name
        name: String,
    },
}
