//! Error types for the engine crate.

use feed_rules::RulesError;
use thiserror::Error;

/// Errors raised while building or extending a content pack.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Value pool '{0}' has no candidates")]
    EmptyPool(String),

    #[error("No templates available for '{0}'")]
    NoTemplates(String),

    #[error("No usernames available for '{0}'")]
    NoUsernames(String),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Errors surfaced by the session loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("The session has not been started")]
    NotStarted,

    #[error("No sentiment-analysis quiz is active")]
    NoActiveQuiz,

    #[error("Quiz answer index {0} is out of range")]
    InvalidQuizAnswer(usize),
}

/// Errors raised by stats stores.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
