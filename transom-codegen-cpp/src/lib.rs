//! C++ emitters for the transom transpiler.
//!
//! Two independent walkers traverse the same syntax tree and produce the two
//! halves of a C++ translation unit:
//!
//! - [`emit_header`] renders the declaration document: namespaces, enums
//!   (with a synthesized stream-insertion operator), classes and interfaces
//!   with their members re-partitioned into `private:` / `protected:` /
//!   `public:` sections.
//! - [`emit_implementation`] renders the definition document: qualified
//!   method and constructor bodies, hoisted static field initializers, and a
//!   small table of standard-library call patterns rewritten to C++ idioms.
//!
//! The walkers share nothing but the tree, the resolver and the type mapper,
//! so they may run in either order, or concurrently if the resolver
//! tolerates concurrent reads. Output is best-effort and meant for human
//! review: unresolvable members are skipped, unrecognized expressions are
//! rendered structurally, and only broken internal invariants (bucketing a
//! member with unknown accessibility, unbalanced indentation) abort a run.
//!
//! ```ignore
//! use transom_codegen_cpp::{emit_header, emit_implementation};
//! use transom_syntax::ConversionSettings;
//!
//! let settings = ConversionSettings::default();
//! let header = emit_header(&unit, &model, &settings)?;
//! let body = emit_implementation(&unit, &model, &settings)?;
//! ```

mod body;
mod error;
mod header;
mod members;
mod naming;
mod type_builder;
mod type_mapper;

pub use body::{ImplWalker, emit_implementation};
pub use error::EmitError;
pub use header::{HeaderWalker, emit_header};
pub use naming::humanize_identifier;
pub use type_builder::{CppVisibility, TypeCodeBuilder};
pub use type_mapper::{argument_type, cpp_type, default_value};
