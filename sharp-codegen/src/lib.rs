//! Template rendering for SharpCode class descriptions.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building blocks (CodeBuilder, Indent)
//! - [`format`] - The code formatter seam and its default implementation
//! - [`render`] - Templates for access modifiers, members and classes
//!
//! Rendering is bottom-up: a class renders its members unformatted,
//! substitutes them into the class template and hands the complete text to
//! the [`CodeFormatter`] once, if formatting was requested.

pub mod builder;
pub mod format;
pub mod render;

pub use builder::{CodeBuilder, Indent};
pub use format::{BraceFormatter, CodeFormatter};
pub use render::{Formattable, SourceRenderer, ToSource};
