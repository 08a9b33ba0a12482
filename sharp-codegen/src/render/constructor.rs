//! Constructor template.

use sharpcode_model::Constructor;

use super::{Formattable, ToSource, keyword};

/// `{access-modifier} {name}({parameters}) { }` on its own line.
impl ToSource for Constructor {
    fn to_source(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(ToSource::to_source)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "\n{} {}({}) {{ }}",
            keyword(self.access_modifier),
            self.class_name,
            parameters
        )
    }
}

impl Formattable for Constructor {}
