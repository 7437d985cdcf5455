//! Summary registration
//!
//! Issued once at session setup: bind the tensor formatter to the type
//! families it knows how to describe. The binding is a session-lifetime
//! side effect; it takes effect immediately and stays active until the
//! session ends (unregistration is owned by the host).

use crate::describe::describe_tensor;
use tensorlens_core::{DebugSession, Result, SourceLanguage};
use tracing::debug;

/// Matches the generic tensor type family, e.g. `DL4S.Tensor<Float>`.
pub const TENSOR_TYPE_PATTERN: &str = r"DL4S\.Tensor<.+>";

/// Matches the generic buffer type family, e.g.
/// `DL4S.Buffer<Float, CPU>`.
pub const BUFFER_TYPE_PATTERN: &str = r"DL4S\.Buffer<.+>";

/// Register [`describe_tensor`] as the summary provider for both
/// matched type families, scoped to Swift type names.
///
/// Both patterns bind the same provider function.
pub fn register_summaries<S: DebugSession>(session: &mut S) -> Result<()> {
    for pattern in [TENSOR_TYPE_PATTERN, BUFFER_TYPE_PATTERN] {
        debug!(pattern, language = %SourceLanguage::Swift, "registering type summary");
        session.add_type_summary(pattern, SourceLanguage::Swift, describe_tensor::<S>)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;
