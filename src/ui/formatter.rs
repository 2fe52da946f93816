//! Pure formatting functions for UI output.
//!
//! All display logic lives here, separated from interactive input handling.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::git::CommitInfo;
use crate::workflow::ReleasePlan;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the planned version transition.
///
/// Shows either "From: old tag -> To: new tag" or, for the first release,
/// just the new tag.
pub fn display_version_transition(plan: &ReleasePlan) {
    match plan.previous_tag.as_deref() {
        Some(old) => {
            println!("\n{}", style("Proposed release:").bold());
            println!("  From: {} ({})", style(old).red(), plan.current);
            println!("  To:   {} (build {})", style(&plan.tag_name).green(), plan.next.build);
        }
        None => {
            println!("\n{}", style("First release:").bold());
            println!("  New tag: {}", style(&plan.tag_name).green());
        }
    }
}

/// Display the commits that the new tag will record.
///
/// Shows up to 10 commits; if more exist, displays the remaining count.
pub fn display_commit_list(commits: &[CommitInfo]) {
    if commits.is_empty() {
        return;
    }

    println!("\n{}", style(format!("{} commit(s) since last release:", commits.len())).bold());
    for commit in commits.iter().take(10) {
        let short_msg = if commit.summary.len() > 60 {
            &commit.summary[..60]
        } else {
            &commit.summary
        };
        println!("  {} {}", style(&commit.hash).cyan(), short_msg);
    }

    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }
}

/// Display a tag's full message.
pub fn display_tag_message(tag_name: &str, message: &str) {
    println!("\n{}", style(format!("tag {}", tag_name)).bold());
    for line in message.lines() {
        println!("  {}", line);
    }
}

/// Display the dry-run preview of a release plan.
pub fn display_dry_run_plan(plan: &ReleasePlan) {
    display_status("Dry run, nothing will be created:");
    display_success(&format!("  Would create annotated tag: {}", plan.tag_name));
    println!("\n{}", style("Tag message:").bold());
    for line in plan.message.lines() {
        println!("  {}", line);
    }
}

/// Display manual push instruction for a tag.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To push this tag later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{BumpKind, Version};

    fn sample_plan() -> ReleasePlan {
        ReleasePlan {
            previous_tag: Some("v1.4.2".to_string()),
            current: Version::new(1, 4, 2, 7),
            next: Version::new(1, 5, 0, 8),
            kind: BumpKind::Minor,
            tag_name: "v1.5.0".to_string(),
            message: "Version 1.5.0 (8)\n".to_string(),
            commits: vec![],
            warnings: vec![],
        }
    }

    // Display functions print to stdout/stderr; these are smoke tests
    // verifying they do not panic on representative input.

    #[test]
    fn test_display_version_transition() {
        display_version_transition(&sample_plan());

        let mut first = sample_plan();
        first.previous_tag = None;
        display_version_transition(&first);
    }

    #[test]
    fn test_display_commit_list_truncates() {
        let commits: Vec<CommitInfo> = (0..15)
            .map(|i| CommitInfo {
                hash: format!("{:07}", i),
                summary: format!("commit {}", i),
                author: "Test".to_string(),
            })
            .collect();
        display_commit_list(&commits);
        display_commit_list(&[]);
    }

    #[test]
    fn test_display_dry_run_plan() {
        display_dry_run_plan(&sample_plan());
    }
}
