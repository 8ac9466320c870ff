//! Optional YAML configuration for the console game.
//!
//! Every field has a default, so a sparse file (or no file at all) yields a
//! playable setup.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Display name of the human player.
    #[serde(default = "default_human_name")]
    pub human_name: String,
    /// Display name of the computer player.
    #[serde(default = "default_computer_name")]
    pub computer_name: String,
    /// Seed for the dice roller; a fixed seed replays the same dice.
    #[serde(default)]
    pub seed: u64,
    /// Where the game is saved after each round.
    #[serde(default = "default_save_path")]
    pub save_path: String,
    /// Optional NDJSON event log path. Unset disables event logging.
    #[serde(default)]
    pub event_log: Option<String>,
}

fn default_human_name() -> String {
    "Human".to_string()
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

fn default_save_path() -> String {
    "yahtzee_save.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            computer_name: default_computer_name(),
            seed: 0,
            save_path: default_save_path(),
            event_log: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&contents)?)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_playable() {
        let cfg = Config::default();
        assert_eq!(cfg.human_name, "Human");
        assert_eq!(cfg.computer_name, "Computer");
        assert_eq!(cfg.seed, 0);
        assert!(cfg.event_log.is_none());
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let cfg = Config::from_yaml("seed: 99\nhuman_name: Ada\n").unwrap();
        assert_eq!(cfg.seed, 99);
        assert_eq!(cfg.human_name, "Ada");
        assert_eq!(cfg.computer_name, "Computer");
        assert_eq!(cfg.save_path, "yahtzee_save.json");
    }

    #[test]
    fn invalid_yaml_fails() {
        assert!(Config::from_yaml("seed: [not a number").is_err());
    }
}
