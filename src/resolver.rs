//! Latest-version resolution from tag history.
//!
//! The most recently created tag whose name looks like a release tag
//! (`v<major>.<minor>.<patch>` under the default pattern, optionally
//! followed by qualifier text) is selected, and its subject line is parsed
//! into a [Version]. No matching tag is not an error: the zero version is
//! returned so the first release can proceed.

use crate::error::Result;
use crate::git::Repository;
use crate::tag::TagPattern;
use crate::version::Version;

/// Environment variable that overrides the resolved build counter
pub const BUILD_ENV_VAR: &str = "BUILD_NUMBER";

/// Outcome of resolving the latest version from tag history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// The tag the version was resolved from, if any
    pub tag: Option<String>,
    /// The resolved version; `Version::ZERO` when no tag matched
    pub version: Version,
}

/// Resolve the current version from the repository's tag history.
///
/// Reads all tags, keeps those whose name matches the release pattern,
/// picks the most recently created one and parses its subject line. A
/// malformed subject is fatal; an absent tag resolves to the zero version.
pub fn resolve_latest_version<R: Repository + ?Sized>(
    repo: &R,
    pattern: &TagPattern,
) -> Result<ResolvedVersion> {
    let matcher = pattern.resolve_matcher()?;

    let tags = repo.list_tags()?;
    // Ties on creation time (tags created within the same second) fall
    // back to name order so selection stays deterministic.
    let latest = tags
        .iter()
        .filter(|t| matcher.is_match(&t.name))
        .max_by_key(|t| (t.when, t.name.clone()));

    let resolved = match latest {
        None => ResolvedVersion {
            tag: None,
            version: Version::ZERO,
        },
        Some(tag) => ResolvedVersion {
            tag: Some(tag.name.clone()),
            version: Version::parse_subject(&tag.subject)?,
        },
    };

    Ok(resolved)
}

/// Numeric build-number override from the environment, if present.
///
/// Read once at the entry point and passed down explicitly, so the
/// resolution and planning logic itself stays free of hidden state.
pub fn build_override_from_env() -> Option<u32> {
    std::env::var(BUILD_ENV_VAR)
        .ok()
        .and_then(|value| value.trim().parse::<u32>().ok())
}
