//! Terminal rendering for coach replies, profiles, and match lists.
//!
//! `ChatRenderer` uses `termimad` for the coach's markdown prose and plain
//! console styling for the structured views (`/profile`, `/matches`).

use console::style;
use serde_json::Value;
use termimad::MadSkin;

use jobcoach_types::matching::{score_percent, JobMatch};
use jobcoach_types::profile::CandidateProfile;

/// Terminal renderer for the chat loop.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(termimad::crossterm::style::Color::Cyan);
        skin.headers[0].set_fg(termimad::crossterm::style::Color::Cyan);
        skin.headers[1].set_fg(termimad::crossterm::style::Color::Cyan);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self { skin }
    }

    /// Print a coach reply with its speaker label, rendered as markdown.
    pub fn print_reply(&self, content: &str) {
        let rendered = self.skin.term_text(content);
        println!();
        println!("  {}", style("Coach >").cyan().bold());
        println!("{rendered}");
    }

    /// Print a user-visible error line for a failed operation.
    pub fn print_error(&self, context: &str, error: &dyn std::fmt::Display) {
        eprintln!("\n  {} {context}: {error}\n", style("!").red().bold());
    }

    /// Print the candidate profile, or a hint when nothing is known yet.
    pub fn print_profile(&self, profile: Option<&CandidateProfile>) {
        let profile = match profile {
            Some(p) if !p.is_empty() => p,
            _ => {
                println!();
                println!(
                    "  {} No profile yet. Tell the coach about your experience first.",
                    style("i").blue().bold()
                );
                println!();
                return;
            }
        };

        println!();
        if let Some(headline) = &profile.headline {
            println!("  {}", style(headline).cyan().bold());
        }
        if let Some(summary) = &profile.summary {
            println!("{}", self.skin.term_text(summary));
        }
        if !profile.strengths.is_empty() {
            println!("  {}", style("Strengths").green().bold());
            for s in &profile.strengths {
                println!("    {} {s}", style("+").green());
            }
        }
        if !profile.improvements.is_empty() {
            println!("  {}", style("To improve").yellow().bold());
            for s in &profile.improvements {
                println!("    {} {s}", style("-").yellow());
            }
        }
        for (label, map) in [
            ("Skills", &profile.skills),
            ("Experience", &profile.experiences),
            ("Preferences", &profile.preferences),
        ] {
            if map.is_empty() {
                continue;
            }
            println!("  {}", style(label).bold());
            for (key, value) in map {
                println!(
                    "    {}  {}",
                    style(format!("{key}:")).dim(),
                    format_detail_value(value)
                );
            }
        }
        if let Some(generated) = &profile.last_generated_at {
            println!(
                "  {}",
                style(format!("updated {}", generated.format("%Y-%m-%d %H:%M UTC"))).dim()
            );
        }
        println!();
    }

    /// Print the match list with 1-based indices for `/bookmark` and `/apply`.
    pub fn print_matches(&self, matches: &[JobMatch], fresh: bool) {
        if matches.is_empty() {
            println!();
            println!(
                "  {} No matches yet. Chat a bit more, then try {}.",
                style("i").blue().bold(),
                style("/matches").yellow()
            );
            println!();
            return;
        }

        println!();
        if !fresh {
            println!(
                "  {}",
                style("Your profile changed since these were computed; /refresh to update.")
                    .yellow()
                    .dim()
            );
            println!();
        }
        for (i, m) in matches.iter().enumerate() {
            let score = match score_percent(m.match_score) {
                Some(pct) => format!("{pct}%"),
                None => "--".to_string(),
            };
            let mut flags = String::new();
            if m.is_bookmarked {
                flags.push_str(" \u{2605}");
            }
            if m.is_applied {
                flags.push_str(" [applied]");
            }
            println!(
                "  {} {} {} {} {}{}",
                style(format!("{}.", i + 1)).bold(),
                style(&score).green().bold(),
                style(&m.company).cyan(),
                style("·").dim(),
                m.title,
                style(flags).yellow()
            );
            if !m.location.is_empty() || m.salary.is_some() {
                println!(
                    "     {}",
                    style(format!(
                        "{}{}",
                        m.location,
                        m.salary
                            .as_deref()
                            .map(|s| format!("  {s}"))
                            .unwrap_or_default()
                    ))
                    .dim()
                );
            }
            let b = &m.score_breakdown;
            if b.tech > 0.0 || b.experience > 0.0 || b.personality > 0.0 {
                println!(
                    "     {}",
                    style(format!(
                        "tech {}  experience {}  personality {}",
                        breakdown_percent(b.tech),
                        breakdown_percent(b.experience),
                        breakdown_percent(b.personality)
                    ))
                    .dim()
                );
            }
            if !m.tech_stacks.is_empty() {
                println!("     {}", style(m.tech_stacks.join(", ")).dim());
            }
            if let Some(summary) = &m.analysis.summary {
                println!("     {summary}");
            }
            for s in &m.analysis.strengths {
                println!("     {} {s}", style("+").green());
            }
            for s in &m.analysis.improvements {
                println!("     {} {s}", style("-").yellow());
            }
        }
        println!();
        println!(
            "  {}",
            style("/bookmark N to save a match, /apply N to apply").dim()
        );
        println!();
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn breakdown_percent(score: f64) -> String {
    match score_percent(score) {
        Some(pct) => format!("{pct}%"),
        None => "--".to_string(),
    }
}

/// Flatten a free-form JSON detail value into a single display line.
///
/// The backend's analysis maps hold strings, lists, and small objects
/// interchangeably; all three need to read naturally in the terminal.
pub fn format_detail_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(format_detail_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}: {}", format_detail_value(v)))
            .collect::<Vec<_>>()
            .join("; "),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_string_passthrough() {
        assert_eq!(format_detail_value(&json!("Rust")), "Rust");
    }

    #[test]
    fn test_format_list_joined() {
        assert_eq!(
            format_detail_value(&json!(["Rust", "Go", "SQL"])),
            "Rust, Go, SQL"
        );
    }

    #[test]
    fn test_format_object_flattened() {
        assert_eq!(
            format_detail_value(&json!({"level": "senior", "years": 5})),
            "level: senior; years: 5"
        );
    }

    #[test]
    fn test_format_nested() {
        assert_eq!(
            format_detail_value(&json!({"langs": ["Rust", "Go"]})),
            "langs: Rust, Go"
        );
    }

    #[test]
    fn test_format_null_and_scalars() {
        assert_eq!(format_detail_value(&json!(null)), "-");
        assert_eq!(format_detail_value(&json!(3)), "3");
        assert_eq!(format_detail_value(&json!(true)), "true");
    }
}
