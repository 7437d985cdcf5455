//! The tensor value formatter
//!
//! One pure function: `(session, value handle) -> display string`. The
//! formatter builds the expression `(<path>).<property>` from the
//! value's expression path and asks the debugged process to evaluate it,
//! walking the scope fallback order until an attempt yields summary
//! text. Every formatting call is stateless and independent.

use crate::text::normalize_summary;
use serde::{Deserialize, Serialize};
use tensorlens_core::{DebugSession, EvalScope, ValueHandle};
use tracing::debug;

/// Returned when no evaluation attempt produces a summary. A fixed
/// harmless string: the debugger UI must never show a raw error in
/// place of a value summary.
pub const DESCRIPTION_UNAVAILABLE: &str = "could not generate description";

/// Configuration for a summary formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Descriptive property to invoke on the value. The debugged types
    /// expose both `description` and the more verbose `debugDescription`.
    pub property: String,

    /// Text returned when every evaluation attempt fails.
    pub placeholder: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            property: "description".to_string(),
            placeholder: DESCRIPTION_UNAVAILABLE.to_string(),
        }
    }
}

/// Summary provider for tensor-like values, with default options.
///
/// Suitable for registration via
/// [`register_summaries`](crate::register_summaries).
pub fn describe_tensor<S: DebugSession>(session: &S, value: &S::Value) -> String {
    describe_with_options(session, value, &SummaryOptions::default())
}

/// Summary provider with explicit options.
///
/// Never fails: evaluation errors are recoverable (the next scope is
/// tried) and total failure yields the configured placeholder. The
/// evaluated expression runs inside the stopped process; side effects it
/// may have there are not guarded against.
pub fn describe_with_options<S: DebugSession>(
    session: &S,
    value: &S::Value,
    options: &SummaryOptions,
) -> String {
    let path = match value.expression_path() {
        Ok(path) => path,
        Err(error) => {
            debug!(%error, "no expression path for value");
            return options.placeholder.clone();
        }
    };
    let expr = describe_expression(&path, &options.property);

    for scope in EvalScope::FALLBACK_ORDER {
        match session.evaluate(scope, &expr) {
            Ok(eval) => match eval.summary() {
                Some(raw) => return normalize_summary(raw),
                // Succeeded but nothing printable; keep walking.
                None => debug!(%scope, %expr, "evaluation produced no summary text"),
            },
            Err(error) => debug!(%scope, %expr, %error, "evaluation failed"),
        }
    }

    options.placeholder.clone()
}

/// The composite expression evaluated in the target: the parentheses
/// keep the property access binding to the whole path.
fn describe_expression(path: &str, property: &str) -> String {
    format!("({}).{}", path, property)
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
