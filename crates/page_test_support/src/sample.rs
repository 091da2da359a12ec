use dom::Node;
use viewer::PageConfig;

use crate::fixture::{self, LineFixture, PageFixture, SpanFixture, SpanKind, TableFixture};

fn real(scope: &str, text: &str) -> SpanFixture {
    SpanFixture {
        kind: SpanKind::Real,
        text: text.to_string(),
        scope: scope.to_string(),
    }
}

fn empty(text: &str) -> SpanFixture {
    SpanFixture {
        kind: SpanKind::Empty,
        text: text.to_string(),
        scope: String::new(),
    }
}

/// A small single-table listing with a gutter, a header, and the kinds of
/// spans the exporter emits: highlighted code with non-breaking-space
/// indentation, plus an empty-text padding line.
pub fn annotated_listing() -> PageFixture {
    PageFixture {
        header: true,
        table_mode: true,
        gutter: true,
        wrap_size: 900.0,
        tables: vec![TableFixture {
            start: 0,
            lines: vec![
                LineFixture {
                    spans: vec![real("keyword", "fn"), real("", "\u{00A0}main()\u{00A0}{")],
                },
                LineFixture {
                    spans: vec![empty("\u{00A0}")],
                },
                LineFixture {
                    spans: vec![real("", "}")],
                },
            ],
        }],
    }
}

/// Tree plus matching config for the canonical sample.
pub fn annotated_page() -> (Node, PageConfig) {
    let fixture = annotated_listing();
    (fixture::build_page(&fixture), fixture::page_config(&fixture))
}
