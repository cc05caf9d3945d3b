//! Command line argument parsing for the lancet CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lancet - stopword filtering, profanity, grammar and repetition checks
#[derive(Parser, Debug, Clone)]
#[command(name = "lancet")]
#[command(about = "Text processing service: stopwords, profanity, grammar and repetition")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LancetArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "LANCET_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LancetArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Process a single text and print the result
    Analyze(AnalyzeArgs),
}

/// Arguments for the HTTP server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides the config file)
    #[arg(short, long, env = "LANCET_PORT")]
    pub port: Option<u16>,
}

/// Arguments for one-shot analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to process. Read from stdin when neither TEXT nor --file is given.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Minimum occurrences for a word to count as repetitive
    #[arg(short, long)]
    pub threshold: Option<usize>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
