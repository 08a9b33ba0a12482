use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sharpcode_codegen::render::keyword;
use sharpcode_manifest::{ClassFile, DEFAULT_FILENAME};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the class description (defaults to ./class.toml)
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = sharpcode_manifest::parse_file(&self.config).unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());
        println!("{}", summary(&file));

        Ok(())
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// Describe the class and its members, one line per member.
fn summary(file: &ClassFile) -> String {
    let class = &file.class;
    let mut lines = vec![
        format!("  namespace {}", class.namespace),
        format!(
            "  {} class {} ({}, {}, {})",
            keyword(class.access_modifier),
            class.name,
            plural(class.fields.len(), "field", "fields"),
            plural(class.constructors.len(), "constructor", "constructors"),
            plural(class.properties.len(), "property", "properties"),
        ),
    ];

    for field in &class.fields {
        lines.push(format!("    field    {} {}", field.ty, field.name));
    }
    for ctor in &class.constructors {
        lines.push(format!(
            "    ctor     {}({})",
            ctor.class_name,
            plural(ctor.parameters.len(), "parameter", "parameters")
        ));
    }
    for property in &class.properties {
        lines.push(format!("    property {} {}", property.ty, property.name));
    }

    lines.join("\n")
}
