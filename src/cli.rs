//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Static checker and 2-D kinematic simulator for ROS node sources
#[derive(Parser, Debug)]
#[command(name = "roscheck")]
#[command(about = "Checks ROS node sources for framework idioms and safety issues")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory where check and simulation artifacts are stored
    #[arg(long, global = true, default_value = "uploads", env = "ROSCHECK_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output format
    #[arg(short, long, global = true, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a source file or zip archive and persist the report
    Check {
        /// Path to a .py/.cpp file or a .zip archive containing one
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Run the kinematic simulation for a stored check result
    Simulate {
        /// Result id printed by a previous `check`
        #[arg(value_name = "RESULT_ID")]
        result_id: String,

        /// Re-harvest joint values from this source file instead of using defaults
        #[arg(long, value_name = "FILE")]
        source: Option<PathBuf>,
    },
    /// Print the stored text report for a result id
    Report {
        /// Result id printed by a previous `check`
        #[arg(value_name = "RESULT_ID")]
        result_id: String,

        /// Print the simulation report instead of the check report
        #[arg(long)]
        simulation: bool,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// JSON bundle
    Json,
}
