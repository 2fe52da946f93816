use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-bump.
///
/// Contains the remote used for fetch/push, the tag naming pattern, and
/// behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of git-bump without affecting version logic.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Skip the interactive follow-up menu after tag creation
    #[serde(default)]
    pub skip_menu: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            tag_pattern: default_tag_pattern(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitbump.toml` in current directory
/// 3. `.gitbump.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitbump.toml").exists() {
        fs::read_to_string("./gitbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.remote, "origin");
        assert_eq!(config.tag_pattern, "v{version}");
        assert!(!config.behavior.skip_menu);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("remote = \"upstream\"").unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.tag_pattern, "v{version}");
    }

    #[test]
    fn test_behavior_config() {
        let config: Config = toml::from_str("[behavior]\nskip_menu = true").unwrap();
        assert!(config.behavior.skip_menu);
    }
}
