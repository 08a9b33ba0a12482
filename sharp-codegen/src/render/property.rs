//! Property template and accessor body inference.

use sharpcode_model::Property;

use super::{Formattable, ToSource, keyword};

/// Render the slot that follows `get` or `set`.
///
/// - absent body: `;` (auto-accessor)
/// - body ending in `}`: ` {body}`, treated as a complete block
/// - anything else: ` => {body};`, an expression body
///
/// The block check is purely textual. An expression that happens to end
/// in `}` (for example `new[] { 1, 2 }`) is emitted as a block, without
/// `=>` or the trailing semicolon.
pub fn accessor_body(body: Option<&str>) -> String {
    match body {
        None => ";".to_string(),
        Some(body) if body.ends_with('}') => format!(" {body}"),
        Some(body) => format!(" => {body};"),
    }
}

/// ```text
/// {access-modifier} {type} {name}
/// {
///     get{getter}
///     set{setter}
/// }
/// ```
///
/// The text starts with a newline and ends with a newline followed by
/// twelve spaces of template indentation.
impl ToSource for Property {
    fn to_source(&self) -> String {
        format!(
            "\n{} {} {}\n{{\n    get{}\n    set{}\n}}\n            ",
            keyword(self.access_modifier),
            self.ty,
            self.name,
            accessor_body(self.getter.as_deref()),
            accessor_body(self.setter.as_deref()),
        )
    }
}

impl Formattable for Property {
    fn formatter_input(&self) -> String {
        self.to_source().trim().to_string()
    }
}
