//! The code formatter seam and the default brace-depth formatter.

use tracing::trace;

use crate::builder::{CodeBuilder, Indent};

/// Normalizes the whitespace of rendered source text.
///
/// Implementations re-indent and tidy whitespace without touching tokens.
/// The renderers call a formatter at most once per top-level render, on
/// the fully assembled text.
pub trait CodeFormatter {
    /// Format raw source text.
    fn format(&self, raw: &str) -> String;
}

/// Blanket implementation for references.
impl<T: CodeFormatter + ?Sized> CodeFormatter for &T {
    fn format(&self, raw: &str) -> String {
        (*self).format(raw)
    }
}

/// Blanket implementation for Box.
impl<T: CodeFormatter + ?Sized> CodeFormatter for Box<T> {
    fn format(&self, raw: &str) -> String {
        self.as_ref().format(raw)
    }
}

/// Line-based formatter that indents by brace depth.
///
/// Every line is trimmed, runs of spaces and tabs outside string and char
/// literals collapse to a single space, blank lines are dropped, and each
/// remaining line is indented by the number of unclosed `{` before it. A
/// line that starts with `}` is written at the depth it closes to. Braces
/// inside literals (including verbatim `@"..."` strings) and comments do
/// not count. Verbatim strings and `/* ... */` comments may span lines.
///
/// # Example
///
/// ```
/// use sharpcode_codegen::{BraceFormatter, CodeFormatter};
///
/// let formatted = BraceFormatter::default().format("\npublic  int Count\n{\nget;\n}\n");
/// assert_eq!(formatted, "public int Count\n{\n    get;\n}\n");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceFormatter {
    indent: Indent,
}

impl BraceFormatter {
    /// Create a formatter with the given indentation.
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Get the indentation used for each brace level.
    pub fn indent(&self) -> Indent {
        self.indent
    }
}

impl CodeFormatter for BraceFormatter {
    fn format(&self, raw: &str) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        let mut state = Scan::Code;

        for line in raw.lines() {
            let line = normalize_line(line.trim(), &mut state);
            if line.text.is_empty() {
                continue;
            }

            for _ in 0..line.leading_closes {
                builder.push_dedent();
            }
            builder.push_line(&line.text);

            let trailing_closes = line.closes - line.leading_closes;
            if line.opens >= trailing_closes {
                for _ in 0..line.opens - trailing_closes {
                    builder.push_indent();
                }
            } else {
                for _ in 0..trailing_closes - line.opens {
                    builder.push_dedent();
                }
            }
        }

        trace!(
            input_len = raw.len(),
            depth = builder.current_indent(),
            "formatted source"
        );
        builder.build()
    }
}

/// A trimmed line with collapsed whitespace and its brace counts.
#[derive(Debug, Default, PartialEq, Eq)]
struct NormalizedLine {
    text: String,
    opens: usize,
    closes: usize,
    /// Closing braces before any other token on the line.
    leading_closes: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    Str,
    Char,
    /// `@"..."`: no backslash escapes, `""` is a quote.
    Verbatim,
    BlockComment,
}

/// Normalize one trimmed line, continuing from the scan state left by the
/// previous line. Only verbatim strings and block comments carry over.
fn normalize_line(line: &str, state: &mut Scan) -> NormalizedLine {
    if matches!(*state, Scan::Str | Scan::Char) {
        *state = Scan::Code;
    }

    let mut out = NormalizedLine::default();
    let mut seen_token = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match *state {
            Scan::Code => match c {
                ' ' | '\t' => {
                    while matches!(chars.peek(), Some(' ' | '\t')) {
                        chars.next();
                    }
                    out.text.push(' ');
                }
                '/' if chars.peek() == Some(&'/') => {
                    // Comment: copied verbatim, braces ignored
                    out.text.push(c);
                    out.text.extend(chars.by_ref());
                    break;
                }
                '/' if chars.peek() == Some(&'*') => {
                    seen_token = true;
                    *state = Scan::BlockComment;
                    out.text.push(c);
                    out.text.extend(chars.next());
                }
                '{' => {
                    seen_token = true;
                    out.opens += 1;
                    out.text.push(c);
                }
                '}' => {
                    if !seen_token {
                        out.leading_closes += 1;
                    }
                    out.closes += 1;
                    out.text.push(c);
                }
                '"' => {
                    seen_token = true;
                    *state = if out.text.ends_with('@') || out.text.ends_with("@$") {
                        Scan::Verbatim
                    } else {
                        Scan::Str
                    };
                    out.text.push(c);
                }
                '\'' => {
                    seen_token = true;
                    *state = Scan::Char;
                    out.text.push(c);
                }
                _ => {
                    seen_token = true;
                    out.text.push(c);
                }
            },
            Scan::Str | Scan::Char => {
                out.text.push(c);
                let quote = if *state == Scan::Str { '"' } else { '\'' };
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.text.push(escaped);
                    }
                } else if c == quote {
                    *state = Scan::Code;
                }
            }
            Scan::Verbatim => {
                out.text.push(c);
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        out.text.extend(chars.next());
                    } else {
                        *state = Scan::Code;
                    }
                }
            }
            Scan::BlockComment => {
                out.text.push(c);
                if c == '*' && chars.peek() == Some(&'/') {
                    out.text.extend(chars.next());
                    *state = Scan::Code;
                }
            }
        }
    }

    out
}
