//! Release workflow orchestration.
//!
//! The workflow is linear with no retry semantics: resolve the current
//! version, compute the next one, create the tag, then hand off to the
//! follow-up menu. Planning is separated from execution so the caller can
//! confirm (or dry-run) between the two; planning performs no mutation.

use crate::boundary::BoundaryWarning;
use crate::error::Result;
use crate::git::{CommitInfo, Repository};
use crate::resolver::{self, ResolvedVersion};
use crate::tag::TagPattern;
use crate::tagger;
use crate::version::{BumpKind, Version};

/// Everything needed to create the next release tag, computed up front
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    /// Tag the current version was resolved from, if any
    pub previous_tag: Option<String>,
    /// The resolved current version
    pub current: Version,
    /// The computed next version
    pub next: Version,
    /// The requested bump kind
    pub kind: BumpKind,
    /// Name of the tag to create
    pub tag_name: String,
    /// Full annotated tag message
    pub message: String,
    /// Commits since the previous release, oldest first
    pub commits: Vec<CommitInfo>,
    /// Non-fatal boundary conditions for the caller to surface
    pub warnings: Vec<BoundaryWarning>,
}

/// Plan the next release: resolve, compute, and compose without mutating.
///
/// `build_override` replaces the resolved build counter before bumping
/// (the `BUILD_NUMBER` environment override, read by the caller).
pub fn plan_release<R: Repository + ?Sized>(
    repo: &R,
    kind: BumpKind,
    pattern: &TagPattern,
    build_override: Option<u32>,
) -> Result<ReleasePlan> {
    let ResolvedVersion { tag, version } = resolver::resolve_latest_version(repo, pattern)?;
    let version = match build_override {
        Some(build) => version.with_build(build),
        None => version,
    };

    let mut warnings = Vec::new();
    if tag.is_none() {
        warnings.push(BoundaryWarning::NoMatchingTag);
    }

    let commits = repo.commits_since(tag.as_deref())?;
    if commits.is_empty() {
        if let Some(latest_tag) = &tag {
            warnings.push(BoundaryWarning::NoNewCommits {
                latest_tag: latest_tag.clone(),
                current_commit_hash: repo.head_oid()?.to_string(),
            });
        }
    }

    let next = version.bump(kind);
    let tag_name = pattern.format(&next.name(kind));
    let message = tagger::compose_tag_message(&next, &commits);

    Ok(ReleasePlan {
        previous_tag: tag,
        current: version,
        next,
        kind,
        tag_name,
        message,
        commits,
        warnings,
    })
}

/// Execute a release plan by creating the annotated tag.
///
/// This is the only mutating step of the workflow; a failure here leaves
/// no partial state because nothing was mutated before it.
pub fn execute_release<R: Repository + ?Sized>(
    repo: &R,
    plan: &ReleasePlan,
) -> Result<tagger::TagCreationResult> {
    tagger::create_release_tag(repo, plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    #[test]
    fn test_plan_minor_release() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.4.2", "Version 1.4.2 (7)", 100);
        repo.add_commit("abc1234", "feat: add widget");
        repo.add_commit("def5678", "fix: widget crash");

        let plan = plan_release(&repo, BumpKind::Minor, &TagPattern::default(), None).unwrap();

        assert_eq!(plan.previous_tag.as_deref(), Some("v1.4.2"));
        assert_eq!(plan.current, Version::new(1, 4, 2, 7));
        assert_eq!(plan.next, Version::new(1, 5, 0, 8));
        assert_eq!(plan.tag_name, "v1.5.0");
        assert!(plan.message.starts_with("Version 1.5.0 (8)\n"));
        assert!(plan.message.contains("- feat: add widget"));
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_plan_snapshot_release() {
        let mut repo = MockRepository::new();
        repo.add_tag("v2.0.0", "Version 2.0.0 (3)", 100);
        repo.add_commit("abc1234", "wip: experiment");

        let plan = plan_release(&repo, BumpKind::Snapshot, &TagPattern::default(), None).unwrap();

        assert_eq!(plan.next, Version::new(2, 0, 0, 4));
        assert_eq!(plan.tag_name, "v2.0.0-4-SNAPSHOT");
    }

    #[test]
    fn test_plan_first_release() {
        let mut repo = MockRepository::new();
        repo.add_commit("abc1234", "Initial commit");

        let plan = plan_release(&repo, BumpKind::Patch, &TagPattern::default(), None).unwrap();

        assert_eq!(plan.previous_tag, None);
        assert_eq!(plan.current, Version::ZERO);
        assert_eq!(plan.next, Version::new(0, 0, 1, 1));
        assert_eq!(plan.tag_name, "v0.0.1");
        assert!(plan.warnings.contains(&BoundaryWarning::NoMatchingTag));
    }

    #[test]
    fn test_plan_applies_build_override() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.4.2", "Version 1.4.2 (7)", 100);
        repo.add_commit("abc1234", "feat: add widget");

        let plan =
            plan_release(&repo, BumpKind::Minor, &TagPattern::default(), Some(42)).unwrap();

        assert_eq!(plan.current, Version::new(1, 4, 2, 42));
        assert_eq!(plan.next, Version::new(1, 5, 0, 43));
    }

    #[test]
    fn test_plan_warns_on_no_new_commits() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", "Version 1.0.0 (1)", 100);

        let plan = plan_release(&repo, BumpKind::Patch, &TagPattern::default(), None).unwrap();

        assert!(plan
            .warnings
            .iter()
            .any(|w| matches!(w, BoundaryWarning::NoNewCommits { .. })));
    }

    #[test]
    fn test_plan_does_not_mutate() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", "Version 1.0.0 (1)", 100);
        repo.add_commit("abc1234", "feat: something");

        plan_release(&repo, BumpKind::Major, &TagPattern::default(), None).unwrap();
        assert_eq!(repo.mutation_count(), 0);
    }

    #[test]
    fn test_execute_creates_the_planned_tag() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.4.2", "Version 1.4.2 (7)", 100);
        repo.add_commit("abc1234", "feat: add widget");

        let plan = plan_release(&repo, BumpKind::Minor, &TagPattern::default(), None).unwrap();
        let result = execute_release(&repo, &plan).unwrap();

        assert_eq!(result.tag_name, "v1.5.0");
        assert_eq!(result.commit_count, 1);

        let created = repo.created_tags();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0, "v1.5.0");
        assert!(created[0].1.starts_with("Version 1.5.0 (8)"));
    }

    #[test]
    fn test_execute_collision_propagates() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", "Version 1.0.0 (1)", 100);
        repo.add_tag("v1.0.1", "some other tag", 50);
        repo.add_commit("abc1234", "fix: small");

        let plan = plan_release(&repo, BumpKind::Patch, &TagPattern::default(), None).unwrap();
        assert_eq!(plan.tag_name, "v1.0.1");
        assert!(execute_release(&repo, &plan).is_err());
    }
}
