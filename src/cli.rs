//! Command-line interface definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "planwright")]
#[command(about = "Turn a mission statement into a full delivery plan")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the planning pipeline on a mission statement
    Plan {
        /// Mission text; omit when reading from --file
        mission: Option<String>,

        /// Read the mission from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Project start date (YYYY-MM-DD); defaults to tomorrow
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Skip the text-generation collaborator and use templates only
        #[arg(long)]
        offline: bool,
    },

    /// Show or reset the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration to planwright.toml
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full plan as pretty-printed JSON
    Json,
}
