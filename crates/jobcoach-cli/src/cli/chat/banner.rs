//! Welcome banner display for coaching sessions.
//!
//! Prints a styled banner when a chat session starts, showing the session
//! title, the server it is connected to, and a hint about slash commands.

use console::style;

use jobcoach_types::chat::SessionId;

/// Print the welcome banner at the start of a coaching session.
pub fn print_welcome_banner(title: &str, server: &str, session_id: SessionId) {
    println!();
    println!("  {} {}", "\u{1f4bc}", style(title).cyan().bold());
    println!(
        "  {}",
        style("Chat about your experience and get matched to jobs.").dim()
    );
    println!();
    println!("  {}  {}", style("Server:").bold(), style(server).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(session_id.to_string()).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
