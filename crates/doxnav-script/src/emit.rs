//! Canonical index script emission.
//!
//! One output shape: two-space indent per depth, one entry tuple per
//! line, inline child lists opened after the target slot and closed at
//! the parent's indent. [`crate::parse`] of emitted text reproduces the
//! script exactly.

use std::fmt::Write;

use doxnav_tree::{Children, NavNode};

use crate::script::NavScript;

/// Emit a script in canonical form.
#[must_use]
pub fn emit(script: &NavScript) -> String {
    let mut out = String::with_capacity(64 + script.node_count() * 48);
    let _ = writeln!(out, "var {} =", script.name);
    out.push_str("[\n");
    emit_entries(&script.roots, 1, &mut out);
    out.push_str("];\n");
    out
}

fn emit_entries(entries: &[NavNode], depth: usize, out: &mut String) {
    for (i, entry) in entries.iter().enumerate() {
        emit_entry(entry, depth, out);
        out.push_str(if i + 1 < entries.len() { ",\n" } else { "\n" });
    }
}

fn emit_entry(entry: &NavNode, depth: usize, out: &mut String) {
    push_indent(depth, out);
    out.push_str("[ ");
    push_quoted(&entry.label, out);
    out.push_str(", ");
    match &entry.target {
        Some(target) => push_quoted(target, out),
        None => out.push_str("null"),
    }
    out.push_str(", ");
    match &entry.children {
        Children::Leaf => out.push_str("null ]"),
        Children::External(name) => {
            push_quoted(name, out);
            out.push_str(" ]");
        }
        Children::Inline(children) if children.is_empty() => out.push_str("[ ] ]"),
        Children::Inline(children) => {
            out.push_str("[\n");
            emit_entries(children, depth + 1, out);
            push_indent(depth, out);
            out.push_str("] ]");
        }
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Append a double-quoted string, escaping what the parser unescapes.
fn push_quoted(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    fn sample() -> NavScript {
        NavScript::new(
            "index",
            vec![
                NavNode::new("Getting Started").with_target("start.html"),
                NavNode::new("Reference")
                    .with_target("reference.html")
                    .with_children(vec![
                        NavNode::new("Types").with_target("reference.html#types"),
                        NavNode::new("Macros"),
                    ]),
                NavNode::new("Files")
                    .with_target("files.html")
                    .with_children_ref("files"),
            ],
        )
    }

    #[test]
    fn test_emit_canonical_form() {
        let expected = "\
var index =
[
  [ \"Getting Started\", \"start.html\", null ],
  [ \"Reference\", \"reference.html\", [
    [ \"Types\", \"reference.html#types\", null ],
    [ \"Macros\", null, null ]
  ] ],
  [ \"Files\", \"files.html\", \"files\" ]
];
";

        assert_eq!(emit(&sample()), expected);
    }

    #[test]
    fn test_emit_empty_index() {
        let script = NavScript::new("index", Vec::new());

        assert_eq!(emit(&script), "var index =\n[\n];\n");
    }

    #[test]
    fn test_emit_escapes_label() {
        let script = NavScript::new(
            "index",
            vec![NavNode::new("say \"hi\"\nback\\slash").with_target("a.html")],
        );

        let out = emit(&script);

        assert!(out.contains(r#"[ "say \"hi\"\nback\\slash", "a.html", null ]"#));
    }

    #[test]
    fn test_emit_escapes_control_chars() {
        let script = NavScript::new("index", vec![NavNode::new("a\u{0007}b")]);

        assert!(emit(&script).contains("\\u0007"));
    }

    #[test]
    fn test_round_trip_identity() {
        let script = sample();

        assert_eq!(parse(&emit(&script)).unwrap(), script);
    }

    #[test]
    fn test_round_trip_empty_inline_children() {
        let script = NavScript::new(
            "index",
            vec![NavNode::new("Hollow").with_children(Vec::new())],
        );

        assert_eq!(parse(&emit(&script)).unwrap(), script);
    }

    #[test]
    fn test_round_trip_awkward_strings() {
        let script = NavScript::new(
            "nav",
            vec![
                NavNode::new("tabs\tand\nnewlines").with_target("x.html#a\"b"),
                NavNode::new("unicode — ünï😀").with_children_ref("sub_1"),
            ],
        );

        assert_eq!(parse(&emit(&script)).unwrap(), script);
    }

    #[test]
    fn test_emit_is_idempotent_over_reformatting() {
        let noisy = "var index=[[\"A\",\"a.html\",null],[\"B\",null,[[\"C\",\"c.html\",null]]]];";
        let script = parse(noisy).unwrap();

        let canonical = emit(&script);

        assert_eq!(emit(&parse(&canonical).unwrap()), canonical);
    }
}
