use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use sharpcode_codegen::{BraceFormatter, Indent, SourceRenderer};
use sharpcode_manifest::{ClassFile, DEFAULT_FILENAME, IndentStyle};
use tracing::info;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// Path to the class description (defaults to ./class.toml)
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,

    /// Write the rendered source to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the raw template output without formatting
    #[arg(long)]
    pub raw: bool,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let file = sharpcode_manifest::parse_file(&self.config).unwrap_or_exit();
        let source = render_class_file(&file, !self.raw);

        match &self.output {
            Some(path) => {
                write_output(path, &source)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = source.len(), "wrote rendered class");
                println!("Rendered {} -> {}", file.class.name, path.display());
            }
            None => print!("{source}"),
        }

        Ok(())
    }
}

/// Render a parsed class file with the indentation it asks for.
pub(crate) fn render_class_file(file: &ClassFile, formatted: bool) -> String {
    let indent = match file.format.indent {
        IndentStyle::Spaces(width) => Indent::Spaces(width),
        IndentStyle::Tab => Indent::Tab,
    };
    SourceRenderer::with_formatter(BraceFormatter::new(indent)).class(&file.class, formatted)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
