//! Field and parameter templates.

use sharpcode_model::{Field, Parameter};

use super::{Formattable, ToSource, keyword};

/// `{access-modifier} {readonly} {type} {name};`
///
/// A mutable field leaves the `{readonly}` slot empty, so the raw text
/// carries a double space that only the formatter removes.
impl ToSource for Field {
    fn to_source(&self) -> String {
        let readonly = if self.is_readonly { "readonly" } else { "" };
        format!(
            "{} {} {} {};",
            keyword(self.access_modifier),
            readonly,
            self.ty,
            self.name
        )
    }
}

impl Formattable for Field {}

/// `{type} {name}`
impl ToSource for Parameter {
    fn to_source(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }
}
