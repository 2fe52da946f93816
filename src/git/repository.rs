use crate::error::{GitBumpError, Result};
use crate::git::{CommitInfo, Repository, TagInfo};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Discover the git repository containing the current directory
    pub fn discover() -> Result<Self> {
        let repo = Git2Repo::discover(".")?;
        Ok(Git2Repository { repo })
    }

    /// Open or discover a git repository at a path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        Ok(Git2Repository { repo })
    }

    /// Credential callbacks for fetch/push.
    ///
    /// Tries SSH keys from ~/.ssh/ in order of preference, then the SSH
    /// agent, then default credentials.
    fn remote_callbacks<'a>() -> git2::RemoteCallbacks<'a> {
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) =
                    git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });
        callbacks
    }

    /// Resolve a tag reference to the commit it points at
    fn tag_target_commit(&self, tag_name: &str) -> Result<git2::Commit<'_>> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))
            .map_err(|e| GitBumpError::tag(format!("Cannot find tag '{}': {}", tag_name, e)))?;
        let commit = reference
            .peel_to_commit()
            .map_err(|e| GitBumpError::tag(format!("Cannot peel tag '{}': {}", tag_name, e)))?;
        Ok(commit)
    }
}

impl Repository for Git2Repository {
    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| GitBumpError::remote(format!("Cannot find remote: {}", e)))?;

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(Self::remote_callbacks());

        remote
            .fetch(
                &["+refs/tags/*:refs/tags/*"],
                Some(&mut fetch_options),
                None,
            )
            .map_err(|e| GitBumpError::remote(format!("Fetch failed: {}", e)))?;

        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<TagInfo>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(r) => r,
                Err(_) => continue,
            };
            let oid = match reference.target() {
                Some(oid) => oid,
                None => continue,
            };

            // Annotated tags carry their own subject and tagger time; a
            // lightweight tag falls back to the target commit's summary.
            let info = match self.repo.find_tag(oid) {
                Ok(tag) => {
                    let subject = tag
                        .message()
                        .and_then(|m| m.lines().next())
                        .unwrap_or("")
                        .to_string();
                    let when = match tag.tagger() {
                        Some(sig) => sig.when().seconds(),
                        None => match tag.target().ok().and_then(|o| o.into_commit().ok()) {
                            Some(commit) => commit.time().seconds(),
                            None => continue,
                        },
                    };
                    TagInfo {
                        name: name.to_string(),
                        subject,
                        when,
                    }
                }
                Err(_) => match self.repo.find_commit(oid) {
                    Ok(commit) => TagInfo {
                        name: name.to_string(),
                        subject: commit.summary().unwrap_or("").to_string(),
                        when: commit.time().seconds(),
                    },
                    Err(_) => continue,
                },
            };

            tags.push(info);
        }

        Ok(tags)
    }

    fn head_oid(&self) -> Result<Oid> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit.id())
    }

    fn commits_since(&self, tag_name: Option<&str>) -> Result<Vec<CommitInfo>> {
        let head = self.head_oid()?;

        let stop_oid = match tag_name {
            Some(name) => Some(self.tag_target_commit(name)?.id()),
            None => None,
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;

            if Some(oid) == stop_oid {
                break;
            }

            let commit = self.repo.find_commit(oid)?;
            let short = oid.to_string().chars().take(7).collect::<String>();

            commits.push(CommitInfo {
                hash: short,
                summary: commit.summary().unwrap_or("(empty message)").to_string(),
                author: commit.author().name().unwrap_or("unknown").to_string(),
            });
        }

        // Oldest first
        commits.reverse();
        Ok(commits)
    }

    fn tag_message(&self, tag_name: &str) -> Result<String> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))
            .map_err(|e| GitBumpError::tag(format!("Cannot find tag '{}': {}", tag_name, e)))?;
        let oid = reference
            .target()
            .ok_or_else(|| GitBumpError::tag(format!("Tag '{}' has no target", tag_name)))?;

        match self.repo.find_tag(oid) {
            Ok(tag) => Ok(tag.message().unwrap_or("").to_string()),
            Err(_) => {
                let commit = self.repo.find_commit(oid)?;
                Ok(commit.summary().unwrap_or("").to_string())
            }
        }
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let signature = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &signature, message, false)
            .map_err(|e| GitBumpError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        self.repo
            .tag_delete(name)
            .map_err(|e| GitBumpError::tag(format!("Cannot delete tag '{}': {}", name, e)))
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| GitBumpError::remote(format!("Cannot find remote: {}", e)))?;

        let mut callbacks = Self::remote_callbacks();
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                Err(git2::Error::from_str(&format!(
                    "Push failed for {}: {}",
                    refname, status
                )))
            } else {
                Ok(())
            }
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);
        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    GitBumpError::remote(format!("Network error during push: {}", e))
                }
                _ => GitBumpError::remote(format!("Failed to push tag '{}': {}", name, e)),
            })?;

        Ok(())
    }
}
