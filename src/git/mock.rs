use crate::error::{GitBumpError, Result};
use crate::git::{CommitInfo, Repository, TagInfo};
use git2::Oid;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations.
///
/// Fixtures (tags, commits, head) are set up before the test; every
/// mutating call is recorded so tests can assert which commands ran.
pub struct MockRepository {
    tags: Vec<TagInfo>,
    commits: Vec<CommitInfo>,
    head: Oid,
    created: Mutex<Vec<(String, String)>>,
    deleted: Mutex<Vec<String>>,
    pushed: Mutex<Vec<(String, String)>>,
    fetched: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            commits: Vec::new(),
            head: Oid::zero(),
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            pushed: Mutex::new(Vec::new()),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Add a tag fixture
    pub fn add_tag(&mut self, name: impl Into<String>, subject: impl Into<String>, when: i64) {
        self.tags.push(TagInfo {
            name: name.into(),
            subject: subject.into(),
            when,
        });
    }

    /// Add a commit fixture returned by `commits_since`
    pub fn add_commit(&mut self, hash: impl Into<String>, summary: impl Into<String>) {
        self.commits.push(CommitInfo {
            hash: hash.into(),
            summary: summary.into(),
            author: "Test Author".to_string(),
        });
    }

    /// Set the HEAD oid
    pub fn set_head(&mut self, oid: Oid) {
        self.head = oid;
    }

    /// Tags created through the trait, as (name, message) pairs
    pub fn created_tags(&self) -> Vec<(String, String)> {
        self.created.lock().unwrap().clone()
    }

    /// Tags deleted through the trait
    pub fn deleted_tags(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    /// Tags pushed through the trait, as (remote, name) pairs
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed.lock().unwrap().clone()
    }

    /// Total number of mutating commands executed
    pub fn mutation_count(&self) -> usize {
        self.created.lock().unwrap().len()
            + self.deleted.lock().unwrap().len()
            + self.pushed.lock().unwrap().len()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.fetched.lock().unwrap().push(remote.to_string());
        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<TagInfo>> {
        Ok(self.tags.clone())
    }

    fn head_oid(&self) -> Result<Oid> {
        Ok(self.head)
    }

    fn commits_since(&self, _tag_name: Option<&str>) -> Result<Vec<CommitInfo>> {
        // Simplified: the fixture list stands in for "commits since the tag"
        Ok(self.commits.clone())
    }

    fn tag_message(&self, tag_name: &str) -> Result<String> {
        if let Some((_, message)) = self
            .created
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == tag_name)
        {
            return Ok(message.clone());
        }

        self.tags
            .iter()
            .find(|t| t.name == tag_name)
            .map(|t| t.subject.clone())
            .ok_or_else(|| GitBumpError::tag(format!("Cannot find tag '{}'", tag_name)))
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        if self.tags.iter().any(|t| t.name == name) {
            return Err(GitBumpError::tag(format!("Tag '{}' already exists", name)));
        }
        self.created
            .lock()
            .unwrap()
            .push((name.to_string(), message.to_string()));
        Ok(())
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        self.deleted.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.pushed
            .lock()
            .unwrap()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
