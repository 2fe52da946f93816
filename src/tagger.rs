//! Release tag creation.
//!
//! Composes the annotated tag message (subject line plus a bullet list of
//! commits since the previous release) and creates the tag locally. Nothing
//! is pushed from here; pushing is an explicit follow-up action.

use crate::error::Result;
use crate::git::{CommitInfo, Repository};
use crate::version::Version;
use crate::workflow::ReleasePlan;

/// Result of creating a release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCreationResult {
    /// Name of the tag that was created
    pub tag_name: String,
    /// Number of commits recorded in the tag message
    pub commit_count: usize,
}

/// Compose the annotated tag message for a new version.
///
/// The first line is the tag subject convention `Version X.Y.Z (B)` that
/// resolution consumes, so the created tag round-trips. Commit summaries
/// since the previous release follow as a bullet list.
pub fn compose_tag_message(version: &Version, commits: &[CommitInfo]) -> String {
    let mut message = version.subject();
    message.push('\n');

    if !commits.is_empty() {
        message.push_str("\nChanges:\n");
        for commit in commits {
            message.push_str(&format!("- {}\n", commit.summary));
        }
    }

    message
}

/// Create the annotated tag described by a release plan.
///
/// The tag is created locally on the current HEAD. A name collision or any
/// underlying git failure propagates; since this is the only mutating step
/// of the workflow, an abort leaves no partial state behind.
pub fn create_release_tag<R: Repository + ?Sized>(
    repo: &R,
    plan: &ReleasePlan,
) -> Result<TagCreationResult> {
    repo.create_annotated_tag(&plan.tag_name, &plan.message)?;

    Ok(TagCreationResult {
        tag_name: plan.tag_name.clone(),
        commit_count: plan.commits.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(summary: &str) -> CommitInfo {
        CommitInfo {
            hash: "abc1234".to_string(),
            summary: summary.to_string(),
            author: "Test Author".to_string(),
        }
    }

    #[test]
    fn test_compose_message_subject_line() {
        let version = Version::new(1, 5, 0, 8);
        let message = compose_tag_message(&version, &[commit("feat: add thing")]);

        assert!(message.starts_with("Version 1.5.0 (8)\n"));
    }

    #[test]
    fn test_compose_message_bullet_list() {
        let version = Version::new(0, 2, 0, 4);
        let commits = vec![commit("feat: first"), commit("fix: second")];
        let message = compose_tag_message(&version, &commits);

        assert!(message.contains("Changes:\n- feat: first\n- fix: second\n"));
    }

    #[test]
    fn test_compose_message_without_commits() {
        let version = Version::new(1, 0, 0, 2);
        let message = compose_tag_message(&version, &[]);

        assert_eq!(message, "Version 1.0.0 (2)\n");
    }

    #[test]
    fn test_compose_message_round_trips_through_parse() {
        let version = Version::new(2, 3, 1, 9);
        let message = compose_tag_message(&version, &[commit("chore: bump")]);
        let subject = message.lines().next().unwrap();

        assert_eq!(Version::parse_subject(subject).unwrap(), version);
    }
}
