//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for session
//! management, profile and match views, and quick-action prompts.

use console::style;

/// Canned prompts that replace the composer toolbar of a graphical client.
///
/// Prefill actions load a template into the composer so the user can fill in
/// the blanks; send actions go out immediately, leaving any half-written
/// draft untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    /// Prefill an introduction template.
    Template,
    /// Ask for likely interview questions.
    Interview,
    /// Prefill a resume review request.
    Review,
    /// Ask the coach for its best follow-up question.
    Followup,
    /// Ask for a one-week improvement plan.
    Plan,
}

impl QuickAction {
    /// The prompt text for this action.
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::Template => {
                "I'm a [position] developer with [N] years of experience. \
                 My main skills are [skills], and I'm looking for [kind of role]."
            }
            QuickAction::Interview => {
                "Based on my profile so far, what interview questions should I \
                 prepare for? Give me five, with a hint for each."
            }
            QuickAction::Review => {
                "Please review this section of my resume and suggest \
                 improvements: [paste it here]"
            }
            QuickAction::Followup => {
                "What is the one follow-up question whose answer would most \
                 improve my profile? Ask it."
            }
            QuickAction::Plan => {
                "Looking at my weakest area, suggest a concrete one-week plan \
                 to improve it."
            }
        }
    }

    /// Whether this action prefills the composer instead of sending.
    pub fn prefills(&self) -> bool {
        matches!(self, QuickAction::Template | QuickAction::Review)
    }
}

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Start a new session, discarding the current one.
    New,
    /// Show the candidate profile built so far.
    Profile,
    /// Show job matches (cached when fresh).
    Matches,
    /// Recompute job matches server-side.
    Refresh,
    /// Browse active job postings.
    Jobs,
    /// Toggle a bookmark on match N (1-based index into the match list).
    Bookmark(usize),
    /// Apply to the job behind match N.
    Apply(usize),
    /// Run a canned prompt.
    Quick(QuickAction),
    /// Unknown command or usage error.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/new" => Some(ChatCommand::New),
        "/profile" | "/p" => Some(ChatCommand::Profile),
        "/matches" | "/m" => Some(ChatCommand::Matches),
        "/refresh" => Some(ChatCommand::Refresh),
        "/jobs" => Some(ChatCommand::Jobs),
        "/bookmark" | "/bm" => Some(parse_index(arg, "/bookmark", ChatCommand::Bookmark)),
        "/apply" => Some(parse_index(arg, "/apply", ChatCommand::Apply)),
        "/template" => Some(ChatCommand::Quick(QuickAction::Template)),
        "/interview" => Some(ChatCommand::Quick(QuickAction::Interview)),
        "/review" => Some(ChatCommand::Quick(QuickAction::Review)),
        "/followup" => Some(ChatCommand::Quick(QuickAction::Followup)),
        "/plan" => Some(ChatCommand::Quick(QuickAction::Plan)),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Parse a 1-based match index argument for `/bookmark` and `/apply`.
fn parse_index(
    arg: Option<&str>,
    cmd: &str,
    build: impl FnOnce(usize) -> ChatCommand,
) -> ChatCommand {
    match arg.and_then(|a| a.parse::<usize>().ok()) {
        Some(n) if n >= 1 => build(n),
        _ => ChatCommand::Unknown(format!("{cmd} requires a match number, e.g. {cmd} 1")),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     Show this help message", style("/help").cyan());
    println!("  {}    Clear the screen", style("/clear").cyan());
    println!("  {}     End the chat session", style("/exit").cyan());
    println!("  {}      Start a new session", style("/new").cyan());
    println!("  {}  Show your candidate profile", style("/profile").cyan());
    println!("  {}  Show your job matches", style("/matches").cyan());
    println!("  {}  Recompute matches from scratch", style("/refresh").cyan());
    println!("  {}     Browse active job postings", style("/jobs").cyan());
    println!(
        "  {} Bookmark match N from the last list",
        style("/bookmark N").cyan()
    );
    println!("  {}  Apply to match N", style("/apply N").cyan());
    println!();
    println!("  {}", style("Quick prompts:").bold());
    println!();
    println!(
        "  {} Load an introduction template into the composer",
        style("/template").cyan()
    );
    println!(
        "  {}   Load a resume review request into the composer",
        style("/review").cyan()
    );
    println!(
        "  {} Ask for interview questions to prepare",
        style("/interview").cyan()
    );
    println!(
        "  {} Ask the coach for its best follow-up question",
        style("/followup").cyan()
    );
    println!(
        "  {}     Ask for a one-week improvement plan",
        style("/plan").cyan()
    );
    println!();
    println!(
        "  {}",
        style("A loaded template is sent with an empty Enter; typing replaces it.").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_views() {
        assert_eq!(parse("/profile"), Some(ChatCommand::Profile));
        assert_eq!(parse("/matches"), Some(ChatCommand::Matches));
        assert_eq!(parse("/refresh"), Some(ChatCommand::Refresh));
        assert_eq!(parse("/jobs"), Some(ChatCommand::Jobs));
    }

    #[test]
    fn test_parse_bookmark_index() {
        assert_eq!(parse("/bookmark 3"), Some(ChatCommand::Bookmark(3)));
        assert_eq!(parse("/apply 1"), Some(ChatCommand::Apply(1)));
    }

    #[test]
    fn test_parse_bookmark_rejects_bad_index() {
        assert!(matches!(parse("/bookmark"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/bookmark 0"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(
            parse("/apply first"),
            Some(ChatCommand::Unknown(_))
        ));
    }

    #[test]
    fn test_parse_quick_actions() {
        assert_eq!(
            parse("/template"),
            Some(ChatCommand::Quick(QuickAction::Template))
        );
        assert_eq!(
            parse("/interview"),
            Some(ChatCommand::Quick(QuickAction::Interview))
        );
        assert_eq!(parse("/plan"), Some(ChatCommand::Quick(QuickAction::Plan)));
    }

    #[test]
    fn test_quick_action_modes() {
        assert!(QuickAction::Template.prefills());
        assert!(QuickAction::Review.prefills());
        assert!(!QuickAction::Interview.prefills());
        assert!(!QuickAction::Followup.prefills());
        assert!(!QuickAction::Plan.prefills());
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/foo"),
            Some(ChatCommand::Unknown("/foo".to_string()))
        );
    }
}
