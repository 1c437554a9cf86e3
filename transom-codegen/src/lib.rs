//! Text-assembly primitives for the transom transpiler.
//!
//! Provides [`CodeBuilder`], an indentation-tracking append-only buffer with
//! scoped-block helpers, and the [`Indent`] unit it writes with. Builders
//! are purely local state: no I/O, no sharing. Each walker owns its own
//! builders and flattens them to strings when a traversal unit completes.

mod code_builder;
mod error;
mod indent;

pub use code_builder::CodeBuilder;
pub use error::BuilderError;
pub use indent::Indent;
