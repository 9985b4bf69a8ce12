//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "tickdown")]
#[command(about = "A countdown timer for the terminal")]
#[command(version = "0.1.0")]
pub struct Config {
    /// New timer duration as up to six digits read as HHMMSS
    /// (e.g. 130 for one minute thirty seconds)
    pub digits: Option<String>,

    /// Path of the stored duration preference
    #[arg(long, default_value = "tickdown.json")]
    pub store: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
