//! End-to-end rendering tests for whole classes.
//!
//! Formatted output is checked with inline snapshots; run
//! `cargo insta review` after intentional template changes.

use std::cell::RefCell;

use sharpcode_codegen::{BraceFormatter, CodeFormatter, Indent, SourceRenderer, ToSource};
use sharpcode_model::{AccessModifier, Class, Constructor, Field, Parameter, Property};

/// Wraps the default formatter, counting calls and marking its output.
#[derive(Default)]
struct MarkingFormatter {
    inner: BraceFormatter,
    inputs: RefCell<Vec<String>>,
}

const MARKER: &str = "// formatted";

impl CodeFormatter for MarkingFormatter {
    fn format(&self, raw: &str) -> String {
        self.inputs.borrow_mut().push(raw.to_string());
        format!("{MARKER}\n{}", self.inner.format(raw))
    }
}

fn counter_class() -> Class {
    Class::new("Demo.Counting", "Counter")
        .public()
        .field(Field::new("int", "_count").readonly())
        .field(Field::new("string", "_label").access(AccessModifier::Protected))
        .constructor_with([
            Parameter::new("int", "count"),
            Parameter::new("string", "label"),
        ])
        .constructor(Constructor::new("Counter").access(AccessModifier::Internal))
        .property(Property::new("int", "Count").public().getter("_count"))
        .property(
            Property::new("string", "Label")
                .public()
                .getter("{ return _label; }")
                .setter("{ _label = value; }"),
        )
        .property(Property::new("bool", "Enabled").access(AccessModifier::ProtectedInternal))
}

#[test]
fn test_formatted_counter_class() {
    let renderer = SourceRenderer::new();
    insta::assert_snapshot!(renderer.class(&counter_class(), true), @r"
    namespace Demo.Counting
    {
        public class Counter
        {
            private readonly int _count;
            protected string _label;
            public Counter(int count, string label) { }
            internal Counter() { }
            public int Count
            {
                get => _count;
                set;
            }
            public string Label
            {
                get { return _label; }
                set { _label = value; }
            }
            protected internal bool Enabled
            {
                get;
                set;
            }
        }
    }
    ");
}

#[test]
fn test_unformatted_output_is_raw_template_text() {
    let renderer = SourceRenderer::new();
    let class = Class::new("Demo", "Flag")
        .field(Field::new("bool", "_on"))
        .property(Property::new("bool", "On"));

    assert_eq!(
        renderer.class(&class, false),
        concat!(
            "\nnamespace Demo\n{\n    private class Flag\n    {\n",
            "        private  bool _on;\n",
            "        \n",
            "        \nprivate bool On\n{\n    get;\n    set;\n}\n            \n",
            "    }\n}\n            ",
        )
    );
}

#[test]
fn test_empty_class_renders_wrapper_only() {
    let renderer = SourceRenderer::new();
    let class = Class::new("Demo", "Empty");

    assert_eq!(
        renderer.class(&class, true),
        "namespace Demo\n{\n    private class Empty\n    {\n    }\n}\n"
    );
}

#[test]
fn test_class_is_formatted_exactly_once() {
    let renderer = SourceRenderer::with_formatter(MarkingFormatter::default());
    let class = counter_class();

    let formatted = renderer.class(&class, true);

    let inputs = renderer.formatter().inputs.borrow();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0], class.to_source());
    assert_eq!(formatted.matches(MARKER).count(), 1);
    assert!(formatted.starts_with(MARKER));
}

#[test]
fn test_formatting_raw_output_matches_formatted_render() {
    let renderer = SourceRenderer::new();
    let class = counter_class();

    let raw = renderer.class(&class, false);
    assert_eq!(
        renderer.formatter().format(&raw),
        renderer.class(&class, true)
    );
}

#[test]
fn test_members_inside_class_are_not_preformatted() {
    let renderer = SourceRenderer::with_formatter(MarkingFormatter::default());
    let class = Class::new("Demo", "Two")
        .field(Field::new("int", "_a"))
        .field(Field::new("int", "_b"));

    renderer.class(&class, true);

    let inputs = renderer.formatter().inputs.borrow();
    // Member fragments reach the formatter with their double spaces intact.
    assert!(inputs[0].contains("private  int _a;\nprivate  int _b;"));
}

#[test]
fn test_formatted_property_standalone() {
    let renderer = SourceRenderer::new();
    let property = Property::new("int", "Count")
        .public()
        .getter("_count")
        .setter("{ _count = value; }");

    assert_eq!(
        renderer.property(&property, true),
        "public int Count\n{\n    get => _count;\n    set { _count = value; }\n}\n"
    );
}

#[test]
fn test_formatted_constructor_standalone() {
    let renderer = SourceRenderer::new();
    let ctor = Constructor::new("Counter")
        .public()
        .parameter(Parameter::new("int", "count"));

    assert_eq!(
        renderer.constructor(&ctor, true),
        "public Counter(int count) { }\n"
    );
}

#[test]
fn test_custom_indent() {
    let renderer = SourceRenderer::with_formatter(BraceFormatter::new(Indent::Spaces(2)));
    let class = Class::new("N", "C").field(Field::new("int", "x").public());

    assert_eq!(
        renderer.class(&class, true),
        "namespace N\n{\n  private class C\n  {\n    public int x;\n  }\n}\n"
    );
}

#[test]
fn test_verbatim_strings_and_block_comments_keep_depth() {
    let renderer = SourceRenderer::new();
    let class = Class::new("N", "C")
        .property(Property::new("string", "Root").getter(r#"{ return @"C:\"; }"#))
        .property(Property::new("int", "Level").getter("/* { */ 1"));

    assert_eq!(
        renderer.class(&class, true),
        concat!(
            "namespace N\n{\n    private class C\n    {\n",
            "        private string Root\n        {\n",
            "            get { return @\"C:\\\"; }\n",
            "            set;\n        }\n",
            "        private int Level\n        {\n",
            "            get => /* { */ 1;\n",
            "            set;\n        }\n",
            "    }\n}\n",
        )
    );
}
