//! Class description types for the SharpCode generator.
//!
//! These are plain values: they carry no rendering logic of their own and
//! are consumed by reference by `sharpcode-codegen`.

mod access;
mod class;
mod member;

pub use access::AccessModifier;
pub use class::Class;
pub use member::{Constructor, Field, Parameter, Property};
