//! Host configuration loaded from TOML

use duel_core::{RevivePlacement, TournamentEngine};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ArenaResult;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "duelist.toml";

/// Options used when neither the user nor a suggester provided enough
pub const FALLBACK_OPTIONS: [&str; 4] = ["Option 1", "Option 2", "Option 3", "Option 4"];

/// Configuration for the duelist host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// JSON file holding saved decisions
    pub store_path: PathBuf,
    /// Maximum number of decisions listed by `history`
    pub history_limit: usize,
    /// Options to duel when too few were supplied
    pub default_options: Vec<String>,
    /// Where revived candidates rejoin the pool
    pub revive_placement: RevivePlacement,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("duelist_history.json"),
            history_limit: 50,
            default_options: FALLBACK_OPTIONS.iter().map(|s| s.to_string()).collect(),
            revive_placement: RevivePlacement::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ArenaConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> ArenaResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> ArenaResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Engine configured with this config's revive placement
    pub fn engine(&self) -> TournamentEngine {
        TournamentEngine::with_revive_placement(self.revive_placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ArenaConfig::from_toml("").unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(config.default_options.len(), 4);
    }

    #[test]
    fn test_partial_config() {
        let config = ArenaConfig::from_toml(
            r#"
            history_limit = 10
            revive_placement = "back_of_queue"
            default_options = ["Stay", "Go"]
            "#,
        )
        .unwrap();

        assert_eq!(config.history_limit, 10);
        assert_eq!(config.revive_placement, RevivePlacement::BackOfQueue);
        assert_eq!(config.default_options, vec!["Stay", "Go"]);
        assert_eq!(config.store_path, PathBuf::from("duelist_history.json"));
        assert_eq!(
            config.engine().revive_placement(),
            RevivePlacement::BackOfQueue
        );
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(ArenaConfig::from_toml("history_limit = \"lots\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("duelist-missing-{}.toml", uuid::Uuid::new_v4()));
        let config = ArenaConfig::load(&path).unwrap();
        assert_eq!(config, ArenaConfig::default());
    }
}
