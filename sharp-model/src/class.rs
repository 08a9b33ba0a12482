//! Class descriptions.

use crate::{AccessModifier, Constructor, Field, Parameter, Property};

/// A class inside a namespace.
///
/// Member sequences keep insertion order, which is also the order they
/// are rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Class {
    pub namespace: String,
    pub access_modifier: AccessModifier,
    pub name: String,
    pub fields: Vec<Field>,
    pub constructors: Vec<Constructor>,
    pub properties: Vec<Property>,
}

impl Class {
    /// Create a new private class with no members.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            access_modifier: AccessModifier::Private,
            name: name.into(),
            fields: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn access(mut self, access_modifier: AccessModifier) -> Self {
        self.access_modifier = access_modifier;
        self
    }

    pub fn public(self) -> Self {
        self.access(AccessModifier::Public)
    }

    /// Add a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add a constructor.
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Add a public constructor named after this class.
    pub fn constructor_with(self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        let constructor = Constructor::new(self.name.clone())
            .public()
            .parameters(parameters);
        self.constructor(constructor)
    }

    /// Add a property.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Add multiple properties.
    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Total number of members across all sections.
    pub fn member_count(&self) -> usize {
        self.fields.len() + self.constructors.len() + self.properties.len()
    }

    /// Check if this class has no members at all.
    pub fn is_empty(&self) -> bool {
        self.member_count() == 0
    }
}
