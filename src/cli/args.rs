//! Command line argument parsing for the wordtally CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::ranking::TieBreak;

/// wordtally - word frequency analysis for plain-text files
#[derive(Parser, Debug, Clone)]
#[command(name = "wordtally")]
#[command(about = "Word frequency analysis for plain-text files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordTallyArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Analysis configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDTALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordTallyArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze word frequencies in a text file
    Analyze(AnalyzeArgs),

    /// Count raw whitespace-delimited words in a text file
    Count(CountArgs),
}

/// Arguments for word frequency analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of most common words to show
    #[arg(short = 'k', long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Ordering of words with equal counts
    #[arg(short = 't', long)]
    pub tie_break: Option<TieBreakArg>,

    /// Replace invalid UTF-8 instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Save the full report; without a value the configured path is used
    #[arg(short, long, value_name = "REPORT_PATH", num_args = 0..=1)]
    pub output: Option<Option<PathBuf>>,
}

/// Arguments for raw word counting
#[derive(Parser, Debug, Clone)]
pub struct CountArgs {
    /// Text file to count
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Replace invalid UTF-8 instead of failing
    #[arg(long)]
    pub lossy: bool,
}

/// Tie-break policies available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreakArg {
    /// Earlier first occurrence ranks higher
    FirstAppearance,
    /// Alphabetical order
    Alphabetical,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::FirstAppearance => TieBreak::FirstAppearance,
            TieBreakArg::Alphabetical => TieBreak::Alphabetical,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
