//! Validation of parsed class files.
//!
//! Only file-level mistakes are rejected here. Identifier legality and type
//! names are left to the caller; the renderer substitutes whatever it gets.

use std::collections::HashMap;

use miette::SourceSpan;
use sharpcode_model::Class;

use crate::{
    Result,
    error::SourceContext,
    file::{IndentStyle, RawFormat, RawIndent},
};

/// Resolve the `[format].indent` setting.
pub(crate) fn indent_style(format: &RawFormat, ctx: &SourceContext) -> Result<IndentStyle> {
    let span = || find_key_span(ctx.src(), "indent");

    match &format.indent {
        None => Ok(IndentStyle::default()),
        Some(RawIndent::Width(width @ (2 | 4 | 8))) => Ok(IndentStyle::Spaces(*width as u8)),
        Some(RawIndent::Width(width)) => Err(ctx.validation_error(
            format!("unsupported indent width {width}, expected 2, 4 or 8"),
            span(),
        )),
        Some(RawIndent::Name(name)) if name.eq_ignore_ascii_case("tab") => Ok(IndentStyle::Tab),
        Some(RawIndent::Name(name)) => Err(ctx.validation_error(
            format!("unknown indent style '{name}', expected a width or \"tab\""),
            span(),
        )),
    }
}

/// Reject fields and properties that share a name.
pub(crate) fn unique_member_names(class: &Class, ctx: &SourceContext) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let members = class
        .fields
        .iter()
        .map(|f| (f.name.as_str(), "field"))
        .chain(class.properties.iter().map(|p| (p.name.as_str(), "property")));

    for (name, kind) in members {
        if let Some(first_kind) = seen.insert(name, kind) {
            let spans = find_member_name_spans(ctx.src(), name);
            return Err(match spans.as_slice() {
                [first, second, ..] => ctx.duplicate_member_error(name, *first, *second),
                _ => ctx.validation_error(
                    format!("{kind} '{name}' has the same name as a {first_kind}"),
                    spans.first().copied(),
                ),
            });
        }
    }

    Ok(())
}

/// Find the `name = "..."` assignments equal to `name` inside
/// `[[fields]]` and `[[properties]]` tables, in source order.
///
/// The returned spans cover the text between the quotes.
fn find_member_name_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    let mut in_member_table = false;

    lines_with_offsets(src)
        .filter_map(|(start, line)| {
            let trimmed = line.trim_start();
            if trimmed.starts_with('[') {
                let header = trimmed.split('#').next().unwrap_or_default().trim_end();
                in_member_table = matches!(header, "[[fields]]" | "[[properties]]");
                return None;
            }
            if !in_member_table {
                return None;
            }

            let (key, value) = trimmed.split_once('=')?;
            if key.trim_end() != "name" {
                return None;
            }
            let value = value.trim_start();
            let quote = value.chars().next().filter(|c| matches!(c, '"' | '\''))?;
            let rest = value[1..].strip_prefix(name)?;
            rest.starts_with(quote).then(|| {
                let offset = start + (line.len() - value.len()) + 1;
                SourceSpan::from((offset, name.len()))
            })
        })
        .collect()
}

/// Pair each line with the byte offset it starts at.
fn lines_with_offsets(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.lines().scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len() + 1;
        Some((start, line))
    })
}

/// Find a `key =` assignment.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    lines_with_offsets(src).find_map(|(start, line)| {
        let trimmed = line.trim_start();
        let rest = trimmed.strip_prefix(key)?;
        rest.trim_start().starts_with('=').then(|| {
            let indent = line.len() - trimmed.len();
            SourceSpan::from((start + indent, key.len()))
        })
    })
}
