//! Interactive resume wizard: `jobcoach resume`.
//!
//! Walks through the same steps as the web form: basic info, cover letter,
//! work experiences, portfolio projects, then a final confirmation before
//! submitting for matching. Each completed step is saved to the server
//! immediately, so an aborted run keeps the draft server-side.

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};

use jobcoach_core::api::CoachApi;
use jobcoach_types::resume::{BasicInfo, CoverLetter, Project, WorkExperience};

use crate::state::AppState;

fn saving_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Split a comma-separated answer into trimmed, non-empty items.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run the step-by-step resume wizard.
pub async fn run_resume_wizard(state: &AppState, json: bool) -> Result<()> {
    println!();
    println!("  {}", style("Resume builder").cyan().bold());
    println!(
        "  {}",
        style("Four steps: basic info, cover letter, experience, projects.").dim()
    );
    println!();

    let spinner = saving_spinner("Creating resume draft...");
    let resume_id = state.api.create_resume().await;
    spinner.finish_and_clear();
    let resume_id = resume_id?;

    // Step 1: basic info
    println!("  {}", style("1/4 Basic info").bold());
    let basic = BasicInfo {
        name: Input::<String>::new().with_prompt("Name").interact_text()?,
        email: Input::<String>::new().with_prompt("Email").interact_text()?,
        phone: Input::<String>::new()
            .with_prompt("Phone (optional)")
            .allow_empty(true)
            .interact_text()?,
    };
    let spinner = saving_spinner("Saving...");
    let saved = state.api.save_basic_info(resume_id, &basic).await;
    spinner.finish_and_clear();
    saved?;

    // Step 2: cover letter
    println!();
    println!("  {}", style("2/4 Cover letter").bold());
    let letter = CoverLetter {
        self_introduction: Input::<String>::new()
            .with_prompt("Introduce yourself in a few sentences")
            .interact_text()?,
        motivation: Input::<String>::new()
            .with_prompt("What kind of role are you looking for, and why?")
            .interact_text()?,
        strengths: Input::<String>::new()
            .with_prompt("What are your key strengths?")
            .interact_text()?,
    };
    let spinner = saving_spinner("Saving...");
    let saved = state.api.save_cover_letter(resume_id, &letter).await;
    spinner.finish_and_clear();
    saved?;

    // Step 3: work experiences
    println!();
    println!("  {}", style("3/4 Work experience").bold());
    let mut experience_count = 0usize;
    while Confirm::new()
        .with_prompt(if experience_count == 0 {
            "Add a work experience?"
        } else {
            "Add another work experience?"
        })
        .default(experience_count == 0)
        .interact()?
    {
        let exp = WorkExperience {
            company_name: Input::<String>::new()
                .with_prompt("Company")
                .interact_text()?,
            position: Input::<String>::new()
                .with_prompt("Position")
                .interact_text()?,
            start_date: Input::<String>::new()
                .with_prompt("Start date (YYYY-MM)")
                .allow_empty(true)
                .interact_text()?,
            end_date: Input::<String>::new()
                .with_prompt("End date (YYYY-MM, empty if current)")
                .allow_empty(true)
                .interact_text()?,
            responsibilities: split_list(
                &Input::<String>::new()
                    .with_prompt("Main responsibilities (comma-separated)")
                    .allow_empty(true)
                    .interact_text()?,
            ),
        };
        let spinner = saving_spinner("Saving...");
        let saved = state.api.add_experience(resume_id, &exp).await;
        spinner.finish_and_clear();
        saved?;
        experience_count += 1;
    }

    // Step 4: projects
    println!();
    println!("  {}", style("4/4 Projects").bold());
    let mut project_count = 0usize;
    while Confirm::new()
        .with_prompt(if project_count == 0 {
            "Add a project?"
        } else {
            "Add another project?"
        })
        .default(false)
        .interact()?
    {
        let project = Project {
            project_name: Input::<String>::new()
                .with_prompt("Project name")
                .interact_text()?,
            role: Input::<String>::new()
                .with_prompt("Your role")
                .interact_text()?,
            tech_stacks: split_list(
                &Input::<String>::new()
                    .with_prompt("Tech stack (comma-separated)")
                    .allow_empty(true)
                    .interact_text()?,
            ),
            description: Input::<String>::new()
                .with_prompt("Short description")
                .allow_empty(true)
                .interact_text()?,
        };
        let spinner = saving_spinner("Saving...");
        let saved = state.api.add_project(resume_id, &project).await;
        spinner.finish_and_clear();
        saved?;
        project_count += 1;
    }

    // Submit
    println!();
    if !Confirm::new()
        .with_prompt("Submit this resume for matching?")
        .default(true)
        .interact()?
    {
        println!();
        println!(
            "  {} Draft kept as resume {}. Run {} again to finish it.",
            style("i").blue().bold(),
            style(resume_id.to_string()).bold(),
            style("jobcoach resume").yellow()
        );
        println!();
        return Ok(());
    }

    let spinner = saving_spinner("Submitting...");
    let submitted = state.api.submit_resume(resume_id).await;
    spinner.finish_and_clear();
    submitted?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "resume_id": resume_id,
                "experiences": experience_count,
                "projects": project_count,
                "submitted": true,
            })
        );
        return Ok(());
    }

    println!();
    println!(
        "  {} Resume {} submitted!",
        style("\u{2713}").green().bold(),
        style(resume_id.to_string()).bold()
    );
    println!(
        "  Start a chat with {} to see how it matches.",
        style("jobcoach chat").yellow()
    );
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list(" Rust , Go,,  SQL "),
            vec!["Rust".to_string(), "Go".to_string(), "SQL".to_string()]
        );
        assert!(split_list("  ").is_empty());
    }
}
