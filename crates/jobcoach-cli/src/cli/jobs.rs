//! Job posting browser: `jobcoach jobs`.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use jobcoach_core::api::CoachApi;
use jobcoach_types::job::{JobPosting, JobQuery};

use crate::state::AppState;

/// List active job postings in a colored table.
///
/// # Examples
///
/// ```bash
/// jobcoach jobs
/// jobcoach jobs --position backend --location seoul --limit 50
/// ```
pub async fn list_jobs(
    state: &AppState,
    position: Option<String>,
    location: Option<String>,
    limit: u32,
    json: bool,
) -> Result<()> {
    let mut query = JobQuery::new().with_limit(limit);
    if let Some(position) = position {
        query = query.with_position(position);
    }
    if let Some(location) = location {
        query = query.with_location(location);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Loading job postings...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let page = state.api.list_jobs(&query).await;

    spinner.finish_and_clear();
    let page = page?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    print_jobs_table(&page.jobs, page.total);
    Ok(())
}

/// Print a page of postings; shared with the in-chat `/jobs` command.
pub fn print_jobs_table(jobs: &[JobPosting], total: usize) {
    if jobs.is_empty() {
        println!();
        println!(
            "  {} No active job postings match your filters.",
            style("i").blue().bold()
        );
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Company").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Location").fg(Color::White),
        Cell::new("Experience").fg(Color::White),
        Cell::new("Tech").fg(Color::White),
        Cell::new("Deadline").fg(Color::White),
    ]);

    for job in jobs {
        let tech = if job.tech_stacks.len() > 4 {
            format!("{} +{}", job.tech_stacks[..4].join(", "), job.tech_stacks.len() - 4)
        } else {
            job.tech_stacks.join(", ")
        };

        let deadline = match &job.deadline {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => "open".to_string(),
        };

        table.add_row(vec![
            Cell::new(&job.company_name).fg(Color::Cyan),
            Cell::new(&job.title),
            Cell::new(&job.location).fg(Color::DarkGrey),
            Cell::new(&job.experience_text).fg(Color::DarkGrey),
            Cell::new(tech),
            Cell::new(deadline).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  showing {} of {} posting{}",
        style(jobs.len()).bold(),
        style(total).bold(),
        if total == 1 { "" } else { "s" }
    );
    println!();
}
