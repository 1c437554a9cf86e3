//! Visibility-bucketed text assembly for one type declaration.

use transom_codegen::CodeBuilder;
use transom_syntax::Accessibility;

use crate::error::EmitError;

/// The three visibility sections of a C++ class body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CppVisibility {
    Private,
    Protected,
    Public,
}

/// Collects the text of one class or interface, bucketed by visibility.
///
/// Owns five builders: the prologue (`top`), one bucket per visibility tier
/// at indent offset 1, and the epilogue (`bottom`). Members may be visited
/// in any source order; [`TypeCodeBuilder::render`] always serializes
/// `private:`, `protected:`, `public:` in that fixed order, labelling only
/// non-empty sections.
#[derive(Debug)]
pub struct TypeCodeBuilder {
    pub top: CodeBuilder,
    pub private: CodeBuilder,
    pub protected: CodeBuilder,
    pub public: CodeBuilder,
    pub bottom: CodeBuilder,
}

impl TypeCodeBuilder {
    pub fn new() -> Self {
        Self {
            top: CodeBuilder::new(),
            private: CodeBuilder::with_level(1),
            protected: CodeBuilder::with_level(1),
            public: CodeBuilder::with_level(1),
            bottom: CodeBuilder::new(),
        }
    }

    /// Collapse a source accessibility onto a C++ section.
    ///
    /// Internal visibility has no module-scoped C++ equivalent and lands in
    /// the public section. An undetermined accessibility is a contract
    /// violation by the resolver and fails the run; defaulting it would
    /// silently publish a member the source may have hidden.
    pub fn visibility_for(
        accessibility: Option<Accessibility>,
        member: &str,
    ) -> Result<CppVisibility, EmitError> {
        let Some(accessibility) = accessibility else {
            return Err(EmitError::UnresolvedAccessibility {
                member: member.to_string(),
            });
        };
        Ok(match accessibility {
            Accessibility::Private => CppVisibility::Private,
            Accessibility::Protected
            | Accessibility::ProtectedAndInternal
            | Accessibility::ProtectedOrInternal => CppVisibility::Protected,
            Accessibility::Internal | Accessibility::Public => CppVisibility::Public,
        })
    }

    /// The bucket a member with the given accessibility belongs in.
    pub fn bucket_for(
        &mut self,
        accessibility: Option<Accessibility>,
        member: &str,
    ) -> Result<&mut CodeBuilder, EmitError> {
        Ok(match Self::visibility_for(accessibility, member)? {
            CppVisibility::Private => &mut self.private,
            CppVisibility::Protected => &mut self.protected,
            CppVisibility::Public => &mut self.public,
        })
    }

    /// Serialize: top, then each non-empty bucket under its section label,
    /// then bottom.
    pub fn render(&self) -> String {
        let mut out = String::from(self.top.as_str());

        for (label, bucket) in [
            ("private:", &self.private),
            ("protected:", &self.protected),
            ("public:", &self.public),
        ] {
            if !bucket.is_empty() {
                out.push_str(label);
                out.push('\n');
                out.push_str(bucket.as_str());
            }
        }

        out.push_str(self.bottom.as_str());
        out
    }
}

impl Default for TypeCodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
