use crate::Node;
use std::fmt::{self, Write};

/// Deterministic tree serialization and equality for tests.
/// Not a public stable format; intended for internal test comparisons.
///
/// Equivalence rules:
/// - Node kinds must match.
/// - Element names must match.
/// - Attribute list order is significant; names and values must match.
/// - Style property order is significant; names and values must match.
/// - Text nodes, comments and doctypes must match exactly.
/// - Tree ids can be ignored by options (they are assigned, not authored).
#[derive(Clone, Copy, Debug)]
pub struct DomSnapshotOptions {
    pub ignore_ids: bool,
}

impl Default for DomSnapshotOptions {
    fn default() -> Self {
        Self { ignore_ids: true }
    }
}

#[derive(Debug)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(root: &Node, options: DomSnapshotOptions) -> Self {
        let mut lines = Vec::new();
        walk_snapshot(root, &options, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DomSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn walk_snapshot(node: &Node, options: &DomSnapshotOptions, depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Document {
            id,
            doctype,
            children,
        } => {
            let mut line = format!("{indent}#document");
            if let Some(dt) = doctype {
                let _ = write!(&mut line, " doctype={dt}");
            }
            if !options.ignore_ids {
                let _ = write!(&mut line, " [{}]", id.0);
            }
            out.push(line);
            for c in children {
                walk_snapshot(c, options, depth + 1, out);
            }
        }
        Node::Element {
            id,
            name,
            attributes,
            style,
            children,
        } => {
            let mut line = format!("{indent}<{name}");
            for (k, v) in attributes {
                match v {
                    Some(v) => {
                        let _ = write!(&mut line, r#" {k}="{}""#, escape_text(v));
                    }
                    None => {
                        let _ = write!(&mut line, " {k}");
                    }
                }
            }
            line.push('>');
            if !style.is_empty() {
                let styl = style
                    .iter()
                    .map(|(k, v)| format!("{k}: {v};"))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = write!(&mut line, "  /* {styl} */");
            }
            if !options.ignore_ids {
                let _ = write!(&mut line, " [{}]", id.0);
            }
            out.push(line);
            for c in children {
                walk_snapshot(c, options, depth + 1, out);
            }
        }
        Node::Text { id, text } => {
            let mut line = format!("{indent}\"{}\"", escape_text(text));
            if !options.ignore_ids {
                let _ = write!(&mut line, " [{}]", id.0);
            }
            out.push(line);
        }
        Node::Comment { id, text } => {
            let mut line = format!("{indent}<!-- {} -->", escape_text(text));
            if !options.ignore_ids {
                let _ = write!(&mut line, " [{}]", id.0);
            }
            out.push(line);
        }
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' => {
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Panic with a first-mismatch report when the two trees differ under
/// the given options.
pub fn assert_dom_eq(expected: &Node, actual: &Node, options: DomSnapshotOptions) {
    let expected = DomSnapshot::new(expected, options);
    let actual = DomSnapshot::new(actual, options);
    let exp = expected.as_lines();
    let act = actual.as_lines();
    let max = exp.len().max(act.len());
    for i in 0..max {
        let missing = "<missing>";
        let left = exp.get(i).map(String::as_str).unwrap_or(missing);
        let right = act.get(i).map(String::as_str).unwrap_or(missing);
        if left != right {
            panic!(
                "DOM mismatch at snapshot line {}:\nexpected: {left}\nactual:   {right}\n\
                 expected tree:\n{}\nactual tree:\n{}",
                i + 1,
                expected.render(),
                actual.render(),
            );
        }
    }
}
