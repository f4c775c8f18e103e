//! CLI command definitions and dispatch for the `jobcoach` binary.
//!
//! Uses clap derive macros for argument parsing. `jobcoach` with no
//! subcommand drops straight into the chat loop.

pub mod chat;
pub mod jobs;
pub mod resume;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with an AI career coach and get job recommendations.
#[derive(Parser)]
#[command(name = "jobcoach", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive coaching chat (the default).
    Chat,

    /// Browse active job postings.
    #[command(alias = "ls")]
    Jobs {
        /// Filter by position (e.g. "backend", "frontend").
        #[arg(long)]
        position: Option<String>,

        /// Filter by location substring.
        #[arg(long)]
        location: Option<String>,

        /// Maximum number of postings to show.
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },

    /// Build and submit a resume step by step.
    Resume,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}
