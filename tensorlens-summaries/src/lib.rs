//! Tensor summary formatters for debugger sessions
//!
//! Debugger UIs show a raw memory dump for tensor values unless a
//! summary formatter is registered for their types. This crate provides
//! that formatter: it asks the stopped process to evaluate the value's
//! descriptive property and returns the text, so a variables pane shows
//! `Tensor(shape: [2, 3])` instead of a pile of pointers.
//!
//! The host debugger is reached through the capability traits in
//! [`tensorlens_core`]; anything that implements [`DebugSession`] can
//! use the formatter, including the scripted fakes the tests run
//! against.
//!
//! Typical setup, once per session:
//!
//! ```ignore
//! tensorlens_summaries::register_summaries(&mut session)?;
//! ```

pub mod describe;
pub mod register;
pub mod text;

pub use describe::{describe_tensor, describe_with_options, SummaryOptions, DESCRIPTION_UNAVAILABLE};
pub use register::{register_summaries, BUFFER_TYPE_PATTERN, TENSOR_TYPE_PATTERN};
pub use text::normalize_summary;

pub use tensorlens_core::{DebugSession, EvalScope, SourceLanguage, ValueHandle};
