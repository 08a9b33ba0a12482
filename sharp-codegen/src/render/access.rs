//! Access modifier keywords.

use sharpcode_model::AccessModifier;

use super::ToSource;

/// Map an access modifier to its keyword text.
///
/// The default arm covers [`AccessModifier::Private`] and anything not
/// listed, so unknown modifiers always render as `private`.
pub fn keyword(modifier: AccessModifier) -> &'static str {
    match modifier {
        AccessModifier::Internal => "internal",
        AccessModifier::PrivateInternal => "private internal",
        AccessModifier::Protected => "protected",
        AccessModifier::ProtectedInternal => "protected internal",
        AccessModifier::Public => "public",
        _ => "private",
    }
}

impl ToSource for AccessModifier {
    fn to_source(&self) -> String {
        keyword(*self).to_string()
    }
}
