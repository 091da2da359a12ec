#![no_main]

use libfuzzer_sys::fuzz_target;
use page_test_support::{LineFixture, PageFixture, SpanFixture, SpanKind, TableFixture};

// Arbitrary span text through the whole build/index/assemble/round-trip
// path: must never panic, and the plain view toggle must restore state.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let lines: Vec<LineFixture> = input
        .lines()
        .take(64)
        .map(|l| LineFixture {
            spans: vec![
                SpanFixture {
                    kind: SpanKind::Real,
                    text: l.to_string(),
                    scope: String::new(),
                },
                SpanFixture {
                    kind: SpanKind::Empty,
                    text: "\u{00A0}".to_string(),
                    scope: String::new(),
                },
            ],
        })
        .collect();
    if lines.is_empty() {
        return;
    }

    let fixture = PageFixture {
        header: false,
        table_mode: true,
        gutter: false,
        wrap_size: 900.0,
        tables: vec![TableFixture { start: 0, lines }],
    };
    let dom = page_test_support::build_page(&fixture);
    let config = page_test_support::page_config(&fixture);
    let Ok(mut page) = viewer::PageState::new(dom, config) else {
        return;
    };

    let text = page.assemble_plain_text();
    assert!(text.ends_with('\n'));

    page.toggle_plain_text();
    page.toggle_plain_text();
    assert!(!page.is_plain());
});
