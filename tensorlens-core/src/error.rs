//! Error types for Tensorlens

use crate::eval::EvalScope;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("evaluation failed in {scope} scope: {message}")]
    Evaluation { scope: EvalScope, message: String },

    #[error("evaluation produced no summary text")]
    MissingSummary,

    #[error("could not compute expression path: {0}")]
    ExpressionPath(String),

    #[error("summary registration rejected: {0}")]
    Registration(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Shorthand for an evaluation failure in the given scope.
    pub fn evaluation(scope: EvalScope, message: impl Into<String>) -> Self {
        Error::Evaluation {
            scope,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
