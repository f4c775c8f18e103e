//! jobcoach CLI entry point.
//!
//! Binary name: `jobcoach`
//!
//! Parses CLI arguments, loads configuration, builds the REST client, then
//! dispatches to the chat loop, the job browser, the resume wizard, or shell
//! completion generation. Running with no subcommand starts a chat.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,jobcoach=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "jobcoach", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (config, REST client)
    let state = AppState::init().await;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }

        Commands::Jobs {
            position,
            location,
            limit,
        } => {
            cli::jobs::list_jobs(&state, position, location, limit, cli.json).await?;
        }

        Commands::Resume => {
            cli::resume::run_resume_wizard(&state, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
