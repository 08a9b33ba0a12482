//! Class template.

use sharpcode_model::Class;

use super::{Formattable, ToSource, keyword};

/// Render each member raw and join them with newlines.
fn section<T: ToSource>(members: &[T]) -> String {
    members
        .iter()
        .map(ToSource::to_source)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Namespace and class wrapper around the fields, constructors and
/// properties sections, in that order. Members are never formatted here.
impl ToSource for Class {
    fn to_source(&self) -> String {
        format!(
            "\nnamespace {}\n{{\n    {} class {}\n    {{\n        {}\n        {}\n        {}\n    }}\n}}\n            ",
            self.namespace,
            keyword(self.access_modifier),
            self.name,
            section(&self.fields),
            section(&self.constructors),
            section(&self.properties),
        )
    }
}

impl Formattable for Class {}
