//! Access modifiers for classes and members.

use serde::Deserialize;

/// Visibility keyword of a class or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum AccessModifier {
    #[default]
    Private,
    Internal,
    PrivateInternal,
    Protected,
    ProtectedInternal,
    Public,
}

impl AccessModifier {
    /// All modifiers, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Private,
        Self::Internal,
        Self::PrivateInternal,
        Self::Protected,
        Self::ProtectedInternal,
        Self::Public,
    ];

    /// Parse a modifier from its keyword (`"protected internal"`) or its
    /// snake/kebab-case name (`"protected_internal"`).
    ///
    /// Matching ignores case and repeated whitespace. Unrecognized text
    /// falls back to [`AccessModifier::Private`].
    pub fn from_keyword(text: &str) -> Self {
        let normalized = text
            .to_ascii_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "internal" => Self::Internal,
            "private internal" => Self::PrivateInternal,
            "protected" => Self::Protected,
            "protected internal" => Self::ProtectedInternal,
            "public" => Self::Public,
            _ => Self::Private,
        }
    }
}

impl From<&str> for AccessModifier {
    fn from(text: &str) -> Self {
        Self::from_keyword(text)
    }
}

impl From<String> for AccessModifier {
    fn from(text: String) -> Self {
        Self::from_keyword(&text)
    }
}
