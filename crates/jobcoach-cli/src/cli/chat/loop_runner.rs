//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: session creation, welcome banner,
//! the input loop with optimistic sends, slash commands for profile and
//! match views, and quick-action prompts.
//!
//! The composer draft is owned by the session controller, not the readline
//! widget. A submitted non-empty line replaces the draft before sending; an
//! empty Enter sends whatever draft is already there (a prefilled template,
//! or input restored after a failed send).

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use jobcoach_core::api::CoachApi;
use jobcoach_core::session::controller::SessionController;
use jobcoach_types::chat::MessageRole;
use jobcoach_types::error::SendError;
use jobcoach_types::job::JobQuery;
use jobcoach_types::matching::MatchId;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand, QuickAction};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Run the interactive coaching chat.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let mut controller = SessionController::new(state.api.clone());
    let renderer = ChatRenderer::new();

    let pb = spinner("Connecting...");
    let result = controller.create_session().await;
    pb.finish_and_clear();
    let meta = result.map_err(|e| anyhow::anyhow!("could not start a session: {e}"))?.clone();

    print_welcome_banner(&meta.title, state.api.base_url(), meta.id);

    // Greeting seeded by the server, if any.
    for msg in controller.messages() {
        if msg.role == MessageRole::Assistant {
            renderer.print_reply(&msg.content);
        }
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::New => {
                            let pb = spinner("Starting a new session...");
                            let result = controller.create_session().await.map(Clone::clone);
                            pb.finish_and_clear();
                            match result {
                                Ok(meta) => {
                                    print_welcome_banner(
                                        &meta.title,
                                        state.api.base_url(),
                                        meta.id,
                                    );
                                    for msg in controller.messages() {
                                        if msg.role == MessageRole::Assistant {
                                            renderer.print_reply(&msg.content);
                                        }
                                    }
                                }
                                Err(e) => {
                                    renderer.print_error("Could not start a new session", &e);
                                }
                            }
                        }
                        ChatCommand::Profile => {
                            renderer.print_profile(controller.profile());
                        }
                        ChatCommand::Matches => {
                            show_matches(&mut controller, &renderer, false).await;
                        }
                        ChatCommand::Refresh => {
                            show_matches(&mut controller, &renderer, true).await;
                        }
                        ChatCommand::Jobs => {
                            let pb = spinner("Loading job postings...");
                            let result = controller.api().list_jobs(&JobQuery::new()).await;
                            pb.finish_and_clear();
                            match result {
                                Ok(page) => crate::cli::jobs::print_jobs_table(
                                    &page.jobs, page.total,
                                ),
                                Err(e) => {
                                    renderer.print_error("Could not load job postings", &e)
                                }
                            }
                        }
                        ChatCommand::Bookmark(n) => {
                            let Some(id) = match_at(&controller, n, &renderer) else {
                                continue;
                            };
                            match controller.toggle_bookmark(id).await {
                                Ok(true) => println!(
                                    "\n  {} Match {n} bookmarked.\n",
                                    style("\u{2605}").yellow().bold()
                                ),
                                Ok(false) => println!(
                                    "\n  {} Bookmark removed from match {n}.\n",
                                    style("\u{2606}").dim()
                                ),
                                Err(e) => renderer.print_error("Bookmark failed", &e),
                            }
                        }
                        ChatCommand::Apply(n) => {
                            let Some(id) = match_at(&controller, n, &renderer) else {
                                continue;
                            };
                            match controller.apply_to_match(id).await {
                                Ok(()) => println!(
                                    "\n  {} Applied to match {n}. Good luck!\n",
                                    style("\u{2713}").green().bold()
                                ),
                                Err(e) => renderer.print_error("Application failed", &e),
                            }
                        }
                        ChatCommand::Quick(action) => {
                            if action.prefills() {
                                controller.set_input(action.prompt());
                                println!(
                                    "\n  {} Template loaded. Press Enter to send it as-is, or type to replace it.\n",
                                    style("i").blue().bold()
                                );
                            } else {
                                send_prompt(&mut controller, &renderer, action).await;
                            }
                        }
                        ChatCommand::Unknown(detail) => {
                            println!(
                                "\n  {} {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(detail).dim()
                            );
                        }
                    }
                    continue;
                }

                // Plain message: a non-empty line replaces the draft, an
                // empty one resends whatever draft is present.
                if !text.is_empty() {
                    controller.set_input(text);
                }
                if controller.input().trim().is_empty() {
                    continue;
                }
                send_composer(&mut controller, &renderer).await;
            }
        }
    }

    Ok(())
}

/// Send the composer draft, rendering the reply or the failure.
async fn send_composer<A: CoachApi>(
    controller: &mut SessionController<A>,
    renderer: &ChatRenderer,
) {
    let pb = spinner("Thinking...");
    let result = controller.send_input().await.map(|m| m.content.clone());
    pb.finish_and_clear();

    match result {
        Ok(reply) => renderer.print_reply(&reply),
        Err(SendError::Empty) => {}
        Err(e) => {
            renderer.print_error("Message not sent", &e);
            println!(
                "  {}",
                style("Your message was kept; press Enter to retry.").dim()
            );
        }
    }
}

/// Send a quick-action prompt without touching the composer draft.
async fn send_prompt<A: CoachApi>(
    controller: &mut SessionController<A>,
    renderer: &ChatRenderer,
    action: QuickAction,
) {
    let pb = spinner("Thinking...");
    let result = controller
        .send_prompt(action.prompt(), true)
        .await
        .map(|m| m.content.clone());
    pb.finish_and_clear();

    match result {
        Ok(reply) => renderer.print_reply(&reply),
        Err(e) => renderer.print_error("Quick action failed", &e),
    }
}

/// Load and display matches, from cache when possible.
async fn show_matches<A: CoachApi>(
    controller: &mut SessionController<A>,
    renderer: &ChatRenderer,
    refresh: bool,
) {
    let pb = spinner(if refresh {
        "Recomputing matches..."
    } else {
        "Loading matches..."
    });
    let result = controller.load_matches(refresh).await.map(<[_]>::to_vec);
    pb.finish_and_clear();

    match result {
        Ok(list) => renderer.print_matches(&list, controller.matches().is_fresh()),
        Err(e) => renderer.print_error("Could not load matches", &e),
    }
}

/// Resolve a 1-based index from the last shown match list.
fn match_at<A: CoachApi>(
    controller: &SessionController<A>,
    n: usize,
    renderer: &ChatRenderer,
) -> Option<MatchId> {
    match controller.matches().matches().get(n - 1) {
        Some(m) => Some(m.match_id),
        None => {
            renderer.print_error(
                "No such match",
                &"run /matches first, then pick a number from the list",
            );
            None
        }
    }
}
