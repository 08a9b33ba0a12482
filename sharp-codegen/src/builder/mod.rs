//! Text building primitives shared by the formatter.
//!
//! - [`CodeBuilder`] - Line-oriented buffer with an indentation level
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
