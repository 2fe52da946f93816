use std::fmt;

/// Warnings that occur when resolving versions near repository boundaries.
/// These are non-fatal conditions that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag matched the release pattern; this will be the first release
    NoMatchingTag,
    /// No new commits since the latest release tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoMatchingTag => {
                write!(f, "No release tag found; starting from version 0.0.0")
            }
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                let short_hash = if current_commit_hash.len() > 7 {
                    &current_commit_hash[..7]
                } else {
                    current_commit_hash.as_str()
                };
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag, short_hash
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matching_tag_display() {
        let warning = BoundaryWarning::NoMatchingTag;
        assert!(warning.to_string().contains("No release tag"));
    }

    #[test]
    fn test_no_new_commits_display_shortens_hash() {
        let warning = BoundaryWarning::NoNewCommits {
            latest_tag: "v1.0.0".to_string(),
            current_commit_hash: "abc1234def5678".to_string(),
        };

        let msg = warning.to_string();
        assert!(msg.contains("v1.0.0"));
        assert!(msg.contains("abc1234"));
        assert!(!msg.contains("abc1234d"));
    }
}
