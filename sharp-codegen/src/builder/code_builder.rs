//! Code builder utility for emitting properly indented lines.

use super::Indent;

/// Line buffer that prefixes every line with the current indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for use inside loops.
///
/// # Example (Consuming API)
///
/// ```
/// use sharpcode_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::csharp()
///     .line("namespace Demo")
///     .line("{")
///     .indent()
///     .line("class Counter { }")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "namespace Demo\n{\n    class Counter { }\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use sharpcode_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::csharp();
/// builder
///     .push_line("{")
///     .push_indent()
///     .push_line("get;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "{\n    get;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (C# default).
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}
