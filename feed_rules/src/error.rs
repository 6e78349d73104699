//! Error types for the rules crate.

use thiserror::Error;

use crate::posts::PostId;

/// Errors raised by rule evaluation and catalog lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RulesError {
    #[error("Reaction time must be a finite, non-negative number of seconds, got {0}")]
    InvalidReactionTime(f64),

    #[error("Post {0} has already been judged")]
    PostAlreadyJudged(PostId),

    #[error("The session is over: no lives remain")]
    SessionOver,

    #[error("Unknown fallacy kind: {0}")]
    UnknownFallacy(String),

    #[error("Unknown campaign kind: {0}")]
    UnknownCampaign(String),
}

/// Errors raised while loading a [`crate::GameConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
