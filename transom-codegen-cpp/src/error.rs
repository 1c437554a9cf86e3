//! Emission errors.

use thiserror::Error;
use transom_codegen::BuilderError;

/// Fatal errors raised by the emitters.
///
/// Ordinary "unsupported construct" situations never surface here; they are
/// handled by skipping the member or recursing structurally. An `EmitError`
/// means either the resolver broke its contract or a walker mismanaged its
/// own buffers, and the run is abandoned.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A member had to be routed into a visibility bucket but its declared
    /// accessibility could not be determined.
    #[error("accessibility of `{member}` could not be determined")]
    UnresolvedAccessibility { member: String },

    /// A builder invariant was violated while assembling text.
    #[error(transparent)]
    Builder(#[from] BuilderError),
}
