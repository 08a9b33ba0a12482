//! Class description files for the SharpCode generator.
//!
//! A class is described in TOML (`class.toml` by convention):
//!
//! ```toml
//! namespace = "Demo"
//! name = "Counter"
//! access = "public"
//!
//! [format]
//! indent = 4
//!
//! [[fields]]
//! readonly = true
//! type = "int"
//! name = "_count"
//!
//! [[constructors]]
//! access = "public"
//! parameters = [{ type = "int", name = "count" }]
//!
//! [[properties]]
//! access = "public"
//! type = "int"
//! name = "Count"
//! getter = "_count"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod validate;

use std::path::Path;

pub use error::{Error, Result, SourceContext};
pub use file::{ClassFile, FormatConfig, IndentStyle};
use file::RawClassFile;
use tracing::debug;

/// Default filename for class description files.
pub const DEFAULT_FILENAME: &str = "class.toml";

/// Parse a class description file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<ClassFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse a class description from a string (uses "class.toml" as filename)
pub fn parse_str(content: &str) -> Result<ClassFile> {
    parse_str_with_filename(content, DEFAULT_FILENAME)
}

/// Parse a class description from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<ClassFile> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawClassFile = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let indent = validate::indent_style(&raw.format, &ctx)?;
    let class = raw.into_class();
    validate::unique_member_names(&class, &ctx)?;

    debug!(
        file = filename,
        class = %class.name,
        members = class.member_count(),
        "parsed class description"
    );

    Ok(ClassFile {
        class,
        format: FormatConfig { indent },
    })
}
