//! Evaluation scopes and results
//!
//! An expression can be evaluated in three scopes: against the whole
//! debugged process, against the currently selected stack frame, or with
//! no bound context at all. Summary formatters walk these scopes in a
//! fixed fallback order and take the first result that carries text.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope an expression is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvalScope {
    /// The whole debugged process.
    Target,

    /// The currently selected stack frame.
    Frame,

    /// No bound context.
    Standalone,
}

impl EvalScope {
    /// The order in which formatters attempt evaluation.
    pub const FALLBACK_ORDER: [EvalScope; 3] =
        [EvalScope::Target, EvalScope::Frame, EvalScope::Standalone];
}

impl fmt::Display for EvalScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvalScope::Target => "target",
            EvalScope::Frame => "frame",
            EvalScope::Standalone => "standalone",
        };
        write!(f, "{}", name)
    }
}

/// Result of one expression evaluation.
///
/// Ephemeral: produced and consumed within a single formatting call. A
/// successful evaluation does not guarantee summary text; the host may
/// return a value with nothing printable attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    summary: Option<String>,
}

impl Evaluation {
    /// An evaluation that produced summary text.
    pub fn with_summary(text: impl Into<String>) -> Self {
        Evaluation {
            summary: Some(text.into()),
        }
    }

    /// An evaluation that succeeded but produced no summary text.
    pub fn without_summary() -> Self {
        Evaluation { summary: None }
    }

    /// The raw summary text, if any. Not normalized.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// The raw summary text, or [`Error::MissingSummary`].
    pub fn require_summary(&self) -> Result<&str> {
        self.summary.as_deref().ok_or(Error::MissingSummary)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
