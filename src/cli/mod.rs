//! CLI interface and argument parsing
//!
//! svcdeps is driven by its configuration file; the command line only says
//! where that file is.

use clap::Parser;
use std::path::PathBuf;

/// svcdeps - Service dependency exporter
#[derive(Parser, Debug)]
#[command(name = "svcdeps")]
#[command(version, about, long_about = None)]
#[command(author = "svcdeps Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.json", env = "SVCDEPS_CONFIG")]
    pub config: PathBuf,
}
