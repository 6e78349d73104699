//! Tunable session configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Starting values for a fresh session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub starting_lives: u32,
    pub starting_shield: i32,
    /// Gap between posts until the first recalibration.
    pub initial_spawn_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            starting_shield: 100,
            initial_spawn_interval_ms: 8000,
        }
    }
}

/// Timer windows, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long a post waits for a verdict.
    pub answer_window_ms: u64,
    /// How long a combo survives without another correct answer.
    pub combo_window_ms: u64,
    /// Delay before the very first post at level 1.
    pub first_spawn_delay_ms: u64,
    /// Delay before the first post when starting at a later level.
    pub resume_spawn_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            answer_window_ms: 15_000,
            combo_window_ms: 8_000,
            first_spawn_delay_ms: 6_000,
            resume_spawn_delay_ms: 3_500,
        }
    }
}

/// Sentiment-analysis interlude settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Posts processed between quizzes.
    pub threshold: u32,
    pub min_level: u32,
    pub min_campaign_posts: usize,
    /// How many recent campaign posts the question selector inspects.
    pub recent_window: usize,
    pub bonus: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            threshold: 8,
            min_level: 3,
            min_campaign_posts: 2,
            recent_window: 5,
            bonus: 25,
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub session: SessionConfig,
    pub timing: TimingConfig,
    pub quiz: QuizConfig,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Parse configuration from a TOML string. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject values that would stall or break the session loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be at least 1".into()));
        }
        if !(1..=100).contains(&self.session.starting_shield) {
            return Err(ConfigError::Invalid(
                "starting_shield must be within 1..=100".into(),
            ));
        }
        if self.timing.answer_window_ms == 0 {
            return Err(ConfigError::Invalid("answer_window_ms must be positive".into()));
        }
        if self.quiz.threshold == 0 {
            return Err(ConfigError::Invalid("quiz threshold must be positive".into()));
        }
        Ok(())
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.timing.answer_window_ms, 15_000);
        assert_eq!(config.quiz.threshold, 8);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config = GameConfig::from_toml_str(
            r#"
            seed = 42

            [timing]
            answer_window_ms = 20000

            [quiz]
            bonus = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.timing.answer_window_ms, 20_000);
        assert_eq!(config.timing.combo_window_ms, 8_000);
        assert_eq!(config.quiz.bonus, 50);
        assert_eq!(config.quiz.threshold, 8);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_toml_str("[session]\nstarting_lives = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_toml_str("[quiz]\nthreshold = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = GameConfig::from_toml_str("[timing\nanswer_window_ms = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/echo-chamber.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
