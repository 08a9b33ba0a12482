//! Parsing tests for class description files.

use std::io::Write;

use sharpcode_manifest::{Error, IndentStyle, parse_file, parse_str, parse_str_with_filename};
use sharpcode_model::{AccessModifier, Parameter};

const COUNTER: &str = r#"
namespace = "Demo"
name = "Counter"
access = "public"

[[fields]]
readonly = true
type = "int"
name = "_count"

[[constructors]]
access = "public"
parameters = [{ type = "int", name = "count" }]

[[constructors]]
access = "protected internal"
class_name = "Other"

[[properties]]
access = "public"
type = "int"
name = "Count"
getter = "_count"

[[properties]]
type = "string"
name = "Label"
setter = "{ _label = value; }"
"#;

#[test]
fn test_parse_counter() {
    let file = parse_str(COUNTER).expect("valid class file");
    let class = &file.class;

    assert_eq!(class.namespace, "Demo");
    assert_eq!(class.name, "Counter");
    assert_eq!(class.access_modifier, AccessModifier::Public);

    assert_eq!(class.fields.len(), 1);
    assert_eq!(class.fields[0].access_modifier, AccessModifier::Private);
    assert!(class.fields[0].is_readonly);

    assert_eq!(class.constructors[0].class_name, "Counter");
    assert_eq!(
        class.constructors[0].parameters,
        [Parameter::new("int", "count")]
    );
    assert_eq!(class.constructors[1].class_name, "Other");
    assert_eq!(
        class.constructors[1].access_modifier,
        AccessModifier::ProtectedInternal
    );
    assert!(class.constructors[1].parameters.is_empty());

    assert_eq!(class.properties[0].getter.as_deref(), Some("_count"));
    assert_eq!(class.properties[0].setter, None);
    assert_eq!(class.properties[1].getter, None);
    assert_eq!(
        class.properties[1].setter.as_deref(),
        Some("{ _label = value; }")
    );

    assert_eq!(file.format.indent, IndentStyle::Spaces(4));
}

#[test]
fn test_minimal_class() {
    let file = parse_str("namespace = \"N\"\nname = \"C\"\n").expect("valid class file");
    assert!(file.class.is_empty());
    assert_eq!(file.class.access_modifier, AccessModifier::Private);
}

#[test]
fn test_unknown_access_falls_back_to_private() {
    let file = parse_str("namespace = \"N\"\nname = \"C\"\naccess = \"friend\"\n")
        .expect("valid class file");
    assert_eq!(file.class.access_modifier, AccessModifier::Private);
}

#[test]
fn test_indent_settings() {
    let tab = parse_str("namespace = \"N\"\nname = \"C\"\n[format]\nindent = \"tab\"\n")
        .expect("valid class file");
    assert_eq!(tab.format.indent, IndentStyle::Tab);

    let two = parse_str("namespace = \"N\"\nname = \"C\"\n[format]\nindent = 2\n")
        .expect("valid class file");
    assert_eq!(two.format.indent, IndentStyle::Spaces(2));
}

#[test]
fn test_invalid_indent_width() {
    let err = parse_str("namespace = \"N\"\nname = \"C\"\n[format]\nindent = 3\n")
        .expect_err("indent width 3 is rejected");
    match *err {
        Error::Validation { message, span, .. } => {
            assert!(message.contains("unsupported indent width 3"));
            assert!(span.is_some());
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_unknown_indent_name() {
    let err = parse_str("namespace = \"N\"\nname = \"C\"\n[format]\nindent = \"spaces\"\n")
        .expect_err("indent name 'spaces' is rejected");
    match *err {
        Error::Validation { message, span, .. } => {
            assert!(message.contains("unknown indent style 'spaces'"));
            assert!(span.is_some());
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let file = parse_str("namespace = \"N\"\nname = \"C\"\n[format]\nindent = \"TAB\"\n")
        .expect("indent names are case-insensitive");
    assert_eq!(file.format.indent, IndentStyle::Tab);
}

#[test]
fn test_missing_name_is_parse_error() {
    let err = parse_str_with_filename("namespace = \"N\"\n", "broken.toml")
        .expect_err("name is required");
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_unknown_key_is_parse_error() {
    let err = parse_str("namespace = \"N\"\nname = \"C\"\nsealed = true\n")
        .expect_err("unknown keys are rejected");
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_duplicate_member_names() {
    let src = r#"
namespace = "N"
name = "C"

[[fields]]
type = "int"
name = "Count"

[[properties]]
type = "int"
name = "Count"
"#;
    let err = parse_str(src).expect_err("duplicate member");
    match *err {
        Error::DuplicateMember {
            name,
            first_span,
            second_span,
            ..
        } => {
            assert_eq!(name, "Count");
            assert!(first_span.offset() < second_span.offset());
            assert_eq!(
                &src[second_span.offset()..second_span.offset() + second_span.len()],
                "Count"
            );
        }
        other => panic!("expected duplicate member error, got {other:?}"),
    }
}

#[test]
fn test_duplicate_member_span_points_at_name_key() {
    let src = r#"
namespace = "N"
name = "C"

[[fields]]
type = "int"
name = "Status"

[[properties]]
type = "Status"
name = "Status"
"#;
    let err = parse_str(src).expect_err("duplicate member");
    match *err {
        Error::DuplicateMember {
            first_span,
            second_span,
            ..
        } => {
            for span in [first_span, second_span] {
                let line_start = src[..span.offset()].rfind('\n').map_or(0, |i| i + 1);
                assert_eq!(&src[line_start..span.offset()], "name = \"");
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "Status");
            }
            assert!(second_span.offset() > src.find("[[properties]]").expect("properties table"));
        }
        other => panic!("expected duplicate member error, got {other:?}"),
    }
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(COUNTER.as_bytes()).expect("write");

    let parsed = parse_file(file.path()).expect("valid class file");
    assert_eq!(parsed.class.name, "Counter");
}

#[test]
fn test_parse_missing_file() {
    let err = parse_file("does/not/exist/class.toml").expect_err("missing file");
    assert!(matches!(*err, Error::Io { .. }));
}
