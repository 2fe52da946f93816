use crate::error::{GitBumpError, Result};
use std::fmt;

/// Four-component version: semantic version plus a release build counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

/// Which component to increment when computing the next version
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Snapshot,
}

impl Version {
    /// Version resolved when no release tag exists yet
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
        build: 0,
    };

    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Parse a version from an annotated tag subject line.
    ///
    /// The consumed convention is `Version <major>.<minor>.<patch> (<build>)`,
    /// with the build annotation optional. The subject is split into
    /// whitespace-delimited segments after substituting dots:
    ///
    /// - 3 numeric segments (`Version 1.2.3`) -> build defaults to 1
    /// - 4 segments (`Version 1.2.3 (7)`) -> non-digits are stripped from the
    ///   fourth segment to recover the build number
    /// - any other segment count fails with [GitBumpError::MalformedTag]
    pub fn parse_subject(subject: &str) -> Result<Self> {
        let rest = subject.trim();
        let rest = rest.strip_prefix("Version").unwrap_or(rest);

        let dotted = rest.replace('.', " ");
        let segments: Vec<&str> = dotted.split_whitespace().collect();

        let build = match segments.len() {
            3 => 1,
            4 => {
                let digits: String = segments[3]
                    .chars()
                    .filter(|c| c.is_ascii_digit())
                    .collect();
                digits.parse::<u32>().map_err(|_| {
                    GitBumpError::malformed_tag(format!(
                        "build segment '{}' has no number in subject '{}'",
                        segments[3], subject
                    ))
                })?
            }
            n => {
                return Err(GitBumpError::malformed_tag(format!(
                    "expected 3 or 4 version segments in subject '{}', found {}",
                    subject, n
                )))
            }
        };

        let component = |index: usize, name: &str| -> Result<u32> {
            segments[index].parse::<u32>().map_err(|_| {
                GitBumpError::malformed_tag(format!(
                    "invalid {} component '{}' in subject '{}'",
                    name, segments[index], subject
                ))
            })
        };

        Ok(Version {
            major: component(0, "major")?,
            minor: component(1, "minor")?,
            patch: component(2, "patch")?,
            build,
        })
    }

    /// Compute the next version for a bump kind.
    ///
    /// Major, minor and patch bumps reset every lower-significance component
    /// to zero; a snapshot bump carries all three over unchanged. The build
    /// counter increments on every kind.
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
                build: self.build + 1,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
                build: self.build + 1,
            },
            BumpKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
                build: self.build + 1,
            },
            BumpKind::Snapshot => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
                build: self.build + 1,
            },
        }
    }

    /// Replace the build counter, keeping the other components
    pub fn with_build(&self, build: u32) -> Self {
        Version { build, ..*self }
    }

    /// Release name, e.g. "1.5.0"
    pub fn release_name(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Snapshot name, e.g. "2.0.0-4-SNAPSHOT"
    pub fn snapshot_name(&self) -> String {
        format!(
            "{}.{}.{}-{}-SNAPSHOT",
            self.major, self.minor, self.patch, self.build
        )
    }

    /// Version name as rendered for a bump kind
    pub fn name(&self, kind: BumpKind) -> String {
        match kind {
            BumpKind::Snapshot => self.snapshot_name(),
            _ => self.release_name(),
        }
    }

    /// Tag subject line, e.g. "Version 1.5.0 (8)".
    ///
    /// This is the same convention [Version::parse_subject] consumes, so a
    /// tag created from this subject resolves back to the same version.
    pub fn subject(&self) -> String {
        format!(
            "Version {}.{}.{} ({})",
            self.major, self.minor, self.patch, self.build
        )
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Major => write!(f, "major"),
            BumpKind::Minor => write!(f, "minor"),
            BumpKind::Patch => write!(f, "patch"),
            BumpKind::Snapshot => write!(f, "snapshot"),
        }
    }
}
