//! Capability traits for the host debug session
//!
//! The host debugger is an external collaborator: it computes expression
//! paths for values, evaluates expressions against the stopped process,
//! and owns the registry that maps type-name patterns to summary
//! providers. These traits are the surface this crate consumes; real
//! debugger bindings and test fakes implement them the same way.

use crate::error::Result;
use crate::eval::{EvalScope, Evaluation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque borrowed reference to a value in the debugged process.
///
/// Valid only for the duration of the current debugger stop. Handles are
/// never owned by formatters; a formatter borrows one for a single call
/// and drops it immediately after.
pub trait ValueHandle {
    /// The fully qualified access path denoting this value in the
    /// target's address space (e.g. a variable/member chain).
    fn expression_path(&self) -> Result<String>;
}

/// A summary provider: maps a value handle to a display string.
///
/// Providers never fail; on any internal error they return a placeholder
/// string so the debugger UI always has something to show.
pub type SummaryProvider<S> = fn(&S, &<S as DebugSession>::Value) -> String;

/// The capabilities this crate needs from a live debugging session.
pub trait DebugSession {
    /// Value handle type exposed by this session.
    type Value: ValueHandle;

    /// Evaluate an expression in the given scope against the stopped
    /// process. An `Err` means the expression could not be evaluated in
    /// that scope; callers are expected to retry in a wider scope.
    fn evaluate(&self, scope: EvalScope, expr: &str) -> Result<Evaluation>;

    /// Register `provider` as the summary formatter for type names
    /// matching `pattern`, restricted to `language`.
    ///
    /// The binding lives until the session ends; unregistration is owned
    /// by the host.
    fn add_type_summary(
        &mut self,
        pattern: &str,
        language: SourceLanguage,
        provider: SummaryProvider<Self>,
    ) -> Result<()>
    where
        Self: Sized;
}

/// Source language a type-name pattern is scoped to.
///
/// Type-naming conventions differ per language, so every registration
/// names the language its pattern is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLanguage {
    Swift,
    C,
    Cpp,
    ObjC,
}

impl SourceLanguage {
    /// Name the host debugger uses for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLanguage::Swift => "swift",
            SourceLanguage::C => "c",
            SourceLanguage::Cpp => "c++",
            SourceLanguage::ObjC => "objc",
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
