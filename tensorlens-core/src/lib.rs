//! Core types for Tensorlens
//!
//! This crate provides the building blocks shared by the Tensorlens
//! debugger summary formatters, including:
//! - Capability traits for the host debug session
//! - Evaluation scopes and results
//! - Error types

pub mod error;
pub mod eval;
pub mod session;

pub use error::{Error, Result};
pub use eval::{EvalScope, Evaluation};
pub use session::{DebugSession, SourceLanguage, SummaryProvider, ValueHandle};
