//! Class members: fields, constructor parameters, constructors and properties.

use crate::AccessModifier;

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Field {
    pub access_modifier: AccessModifier,
    pub is_readonly: bool,
    pub ty: String,
    pub name: String,
}

impl Field {
    /// Create a new private, mutable field.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            access_modifier: AccessModifier::Private,
            is_readonly: false,
            ty: ty.into(),
            name: name.into(),
        }
    }

    pub fn access(mut self, access_modifier: AccessModifier) -> Self {
        self.access_modifier = access_modifier;
        self
    }

    pub fn public(self) -> Self {
        self.access(AccessModifier::Public)
    }

    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }
}

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A constructor with an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constructor {
    pub access_modifier: AccessModifier,
    pub class_name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

impl Constructor {
    /// Create a new private, parameterless constructor.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            access_modifier: AccessModifier::Private,
            class_name: class_name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn access(mut self, access_modifier: AccessModifier) -> Self {
        self.access_modifier = access_modifier;
        self
    }

    pub fn public(self) -> Self {
        self.access(AccessModifier::Public)
    }

    /// Add a parameter.
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add multiple parameters.
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }
}

/// A property with `get` and `set` accessors.
///
/// An accessor body of `None` renders as an auto-accessor (`get;`). A
/// present body is either a single expression or a complete block; see
/// the property renderer in `sharpcode-codegen` for how the two are told
/// apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Property {
    pub access_modifier: AccessModifier,
    pub ty: String,
    pub name: String,
    pub getter: Option<String>,
    pub setter: Option<String>,
}

impl Property {
    /// Create a new private auto-property.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            access_modifier: AccessModifier::Private,
            ty: ty.into(),
            name: name.into(),
            getter: None,
            setter: None,
        }
    }

    pub fn access(mut self, access_modifier: AccessModifier) -> Self {
        self.access_modifier = access_modifier;
        self
    }

    pub fn public(self) -> Self {
        self.access(AccessModifier::Public)
    }

    /// Set the getter body.
    pub fn getter(mut self, body: impl Into<String>) -> Self {
        self.getter = Some(body.into());
        self
    }

    /// Set the setter body.
    pub fn setter(mut self, body: impl Into<String>) -> Self {
        self.setter = Some(body.into());
        self
    }

    /// Check if both accessors are auto-accessors.
    pub fn is_auto(&self) -> bool {
        self.getter.is_none() && self.setter.is_none()
    }
}
