//! Command-line argument parsing for Peek.

use crate::config;
use clap::Parser;
use std::path::PathBuf;

/// A lightweight viewer and shell for SQLite database files.
#[derive(Parser, Debug)]
#[command(name = "peek")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Database file to open at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Execute a statement and exit instead of starting the shell
    /// (repeatable; statements run in order)
    #[arg(short = 'e', long = "execute", value_name = "SQL")]
    pub execute: Vec<String>,

    /// Write the (possibly modified) database image to PATH before exiting
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Config file path
    #[arg(long, value_name = "PATH", env = "PEEK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print one-shot query results as JSON instead of aligned text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path, using the platform default when no
    /// override was given.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::default_config_path)
    }
}
