//! Error types for the fallible edges of the crate.
//!
//! Question generation and answer checking never fail. Errors only come from
//! parsing topic names, loading a [`QuizConfig`](super::config::QuizConfig),
//! and driving a [`Session`](crate::session::Session) out of order.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The topic name does not match any of the four topics.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    /// The submitted answer was empty after trimming.
    #[error("answer is empty")]
    EmptyAnswer,

    /// The session is not on the playing screen.
    #[error("no round in progress")]
    NotPlaying,

    /// The current question has already been judged.
    #[error("current question was already answered")]
    AlreadyAnswered,

    /// `advance` was called before the current question was answered.
    #[error("current question has not been answered yet")]
    AwaitingAnswer,

    /// The configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The configuration could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
