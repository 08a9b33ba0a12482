//! Templates that turn class descriptions into source text.
//!
//! Raw rendering is exposed through [`ToSource`]; [`SourceRenderer`] adds
//! the optional formatting pass on top of it.

mod access;
mod class;
mod constructor;
mod field;
mod property;

use sharpcode_model::{AccessModifier, Class, Constructor, Field, Parameter, Property};
use tracing::debug;

pub use access::keyword;
pub use property::accessor_body;

use crate::format::{BraceFormatter, CodeFormatter};

/// Raw template rendering, with no whitespace normalization.
pub trait ToSource {
    /// Render this value into unformatted source text.
    fn to_source(&self) -> String;
}

/// Values that may be rendered standalone through a [`CodeFormatter`].
///
/// Parameters and access modifiers only ever appear embedded in a larger
/// template and do not implement this trait.
pub trait Formattable: ToSource {
    /// The text handed to the formatter. Defaults to the raw rendering.
    fn formatter_input(&self) -> String {
        self.to_source()
    }
}

/// Blanket implementation for references.
impl<T: ToSource + ?Sized> ToSource for &T {
    fn to_source(&self) -> String {
        (*self).to_source()
    }
}

impl<T: Formattable + ?Sized> Formattable for &T {
    fn formatter_input(&self) -> String {
        (*self).formatter_input()
    }
}

/// Renders class descriptions, formatting the result on request.
///
/// The formatter is applied once per call, to the complete text; nested
/// members of a class are always rendered raw.
///
/// # Example
///
/// ```
/// use sharpcode_codegen::SourceRenderer;
/// use sharpcode_model::Field;
///
/// let renderer = SourceRenderer::new();
/// let field = Field::new("int", "Count").public();
///
/// assert_eq!(renderer.field(&field, false), "public  int Count;");
/// assert_eq!(renderer.field(&field, true), "public int Count;\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceRenderer<F = BraceFormatter> {
    formatter: F,
}

impl SourceRenderer {
    /// Create a renderer using the default [`BraceFormatter`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: CodeFormatter> SourceRenderer<F> {
    /// Create a renderer with a custom formatter.
    pub fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }

    /// Get the formatter.
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Render any formattable value, optionally formatted.
    pub fn render<T: Formattable + ?Sized>(&self, item: &T, formatted: bool) -> String {
        if formatted {
            self.formatter.format(&item.formatter_input())
        } else {
            item.to_source()
        }
    }

    /// Render an access modifier keyword.
    pub fn access_modifier(&self, modifier: AccessModifier) -> &'static str {
        keyword(modifier)
    }

    /// Render a parameter. Parameters are never formatted.
    pub fn parameter(&self, parameter: &Parameter) -> String {
        parameter.to_source()
    }

    pub fn field(&self, field: &Field, formatted: bool) -> String {
        self.render(field, formatted)
    }

    pub fn constructor(&self, constructor: &Constructor, formatted: bool) -> String {
        self.render(constructor, formatted)
    }

    pub fn property(&self, property: &Property, formatted: bool) -> String {
        self.render(property, formatted)
    }

    /// Render a complete class.
    pub fn class(&self, class: &Class, formatted: bool) -> String {
        debug!(
            namespace = %class.namespace,
            class = %class.name,
            fields = class.fields.len(),
            constructors = class.constructors.len(),
            properties = class.properties.len(),
            formatted,
            "rendering class"
        );
        self.render(class, formatted)
    }
}
