//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the version-control
//! operations git-bump needs, allowing for a real implementation backed by
//! the `git2` crate and a mock implementation for testing.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations so the resolve/bump/tag logic can be exercised without
//! touching a real repository.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// A tag as seen by the resolver: name, subject line and creation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// The tag name (e.g. "v1.2.3")
    pub name: String,
    /// First line of the tag message (the target commit summary for
    /// lightweight tags)
    pub subject: String,
    /// Creation time in seconds since the epoch (tagger time for annotated
    /// tags, commit time otherwise)
    pub when: i64,
}

/// Commit information used when composing tag messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// The commit hash (shortened)
    pub hash: String,
    /// The commit summary (first line of the message)
    pub summary: String,
    /// The commit author
    pub author: String,
}

/// Common git operation trait for abstraction
///
/// The workflow is strictly sequential, so implementors only need `Send`.
/// Methods return [crate::error::Result] so underlying failures
/// (`git2::Error`) surface uniformly as [crate::error::GitBumpError::Git]
/// and abort the workflow.
pub trait Repository: Send {
    /// Fetch all tags from a remote
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// List every tag in the repository with its subject and creation time
    fn list_tags(&self) -> Result<Vec<TagInfo>>;

    /// Get the OID of the current HEAD commit
    fn head_oid(&self) -> Result<Oid>;

    /// Get commits reachable from HEAD since a tag, oldest first.
    ///
    /// With `None`, returns every commit reachable from HEAD.
    fn commits_since(&self, tag_name: Option<&str>) -> Result<Vec<CommitInfo>>;

    /// Read the full message of a tag
    fn tag_message(&self, tag_name: &str) -> Result<String>;

    /// Create an annotated tag with the given message on the current HEAD.
    ///
    /// Fails if a tag with the same name already exists.
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Delete a local tag
    fn delete_tag(&self, name: &str) -> Result<()>;

    /// Push a tag to a remote
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
