//! Deserialization of `class.toml` into the class model.

use serde::Deserialize;
use sharpcode_model::{AccessModifier, Class, Constructor, Field, Parameter, Property};

/// A parsed class description file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFile {
    /// The described class.
    pub class: Class,
    /// Formatting options from the `[format]` table.
    pub format: FormatConfig,
}

/// Formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatConfig {
    pub indent: IndentStyle,
}

/// Indentation requested for formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// Spaces per level (2, 4 or 8).
    Spaces(u8),
    Tab,
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// Root of `class.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawClassFile {
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub access: AccessModifier,
    #[serde(default)]
    pub format: RawFormat,
    #[serde(default)]
    pub fields: Vec<RawField>,
    #[serde(default)]
    pub constructors: Vec<RawConstructor>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawFormat {
    pub indent: Option<RawIndent>,
}

/// `indent = 4` or `indent = "tab"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawIndent {
    Width(i64),
    Name(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawField {
    #[serde(default)]
    pub access: AccessModifier,
    #[serde(default)]
    pub readonly: bool,
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawParameter {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawConstructor {
    #[serde(default)]
    pub access: AccessModifier,
    pub class_name: Option<String>,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawProperty {
    #[serde(default)]
    pub access: AccessModifier,
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub getter: Option<String>,
    pub setter: Option<String>,
}

impl RawClassFile {
    /// Convert into the class model. Constructors without an explicit
    /// `class_name` take the class's name.
    pub(crate) fn into_class(self) -> Class {
        let class_name = self.name.clone();

        Class {
            namespace: self.namespace,
            access_modifier: self.access,
            name: self.name,
            fields: self
                .fields
                .into_iter()
                .map(|f| Field {
                    access_modifier: f.access,
                    is_readonly: f.readonly,
                    ty: f.ty,
                    name: f.name,
                })
                .collect(),
            constructors: self
                .constructors
                .into_iter()
                .map(|c| Constructor {
                    access_modifier: c.access,
                    class_name: c.class_name.unwrap_or_else(|| class_name.clone()),
                    parameters: c
                        .parameters
                        .into_iter()
                        .map(|p| Parameter::new(p.ty, p.name))
                        .collect(),
                })
                .collect(),
            properties: self
                .properties
                .into_iter()
                .map(|p| Property {
                    access_modifier: p.access,
                    ty: p.ty,
                    name: p.name,
                    getter: p.getter,
                    setter: p.setter,
                })
                .collect(),
        }
    }
}
