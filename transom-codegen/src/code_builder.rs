//! Code builder utility for generating properly indented code.

use crate::error::BuilderError;
use crate::indent::Indent;

/// An indentation-tracking text buffer with scoped-block helpers.
///
/// All methods mutate a local buffer and return `&mut Self` for chaining.
/// Depth never goes below zero: [`CodeBuilder::unindent`] on a zero-depth
/// builder reports [`BuilderError::IndentUnderflow`] instead of clamping.
///
/// # Example
///
/// ```
/// use transom_codegen::{BuilderError, CodeBuilder};
///
/// let mut cb = CodeBuilder::new();
/// cb.append_line("int main()");
/// cb.scope(|cb| {
///     cb.push_line("return 0;");
///     Ok::<_, BuilderError>(())
/// })?;
///
/// assert_eq!(cb.build(), "int main()\n{\n  return 0;\n}\n");
/// # Ok::<(), BuilderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a builder at depth zero with the C++ indentation unit.
    pub fn new() -> Self {
        Self::with_level(0)
    }

    /// Create a builder starting at the given depth.
    ///
    /// Visibility buckets sit one level inside their type, so they are
    /// created at depth 1.
    pub fn with_level(indent_level: usize) -> Self {
        Self {
            indent_level,
            indent: Indent::default(),
            buffer: String::new(),
        }
    }

    /// Append raw text without indentation or newline.
    pub fn append(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Append raw text only when `condition` holds.
    pub fn append_if(&mut self, s: &str, condition: bool) -> &mut Self {
        if condition {
            self.append(s);
        }
        self
    }

    /// Write the current indentation.
    pub fn append_indent(&mut self) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self
    }

    /// Write the current indentation followed by `s`, no newline.
    pub fn append_indented(&mut self, s: &str) -> &mut Self {
        self.append_indent();
        self.append(s)
    }

    /// Append `s` and a newline, without indentation.
    pub fn append_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Write the current indentation, `s`, and a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.append_indent();
        self.append_line(s)
    }

    /// Add a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Open a brace-delimited scope: `{` at the current depth, run `body`
    /// one level deeper, close with a matching `}`.
    pub fn scope<E, F>(&mut self, body: F) -> Result<(), E>
    where
        E: From<BuilderError>,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.push_line("{");
        self.indent_level += 1;
        body(self)?;
        self.unindent()?;
        self.push_line("}");
        Ok(())
    }

    /// Increase depth without a block boundary. Pair with
    /// [`CodeBuilder::unindent`], or use [`CodeBuilder::indented`] when the
    /// region has a natural extent.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Run `body` one level deeper, restoring the depth afterwards.
    pub fn indented<E, F>(&mut self, body: F) -> Result<(), E>
    where
        E: From<BuilderError>,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.indent_level += 1;
        body(self)?;
        self.unindent()?;
        Ok(())
    }

    /// Decrease depth. Underflow is an internal invariant violation.
    pub fn unindent(&mut self) -> Result<(), BuilderError> {
        if self.indent_level == 0 {
            return Err(BuilderError::IndentUnderflow);
        }
        self.indent_level -= 1;
        Ok(())
    }

    /// Current indentation depth.
    pub fn level(&self) -> usize {
        self.indent_level
    }

    /// True when nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Borrow the buffer contents.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the assembled text.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
