use criterion::{Criterion, black_box, criterion_group, criterion_main};
use page_test_support::{
    FixtureMetrics, LineFixture, PageFixture, SpanFixture, SpanKind, TableFixture, build_page,
    page_config,
};
use viewer::PageState;

const SMALL_LINES: usize = 64;
const LARGE_LINES: usize = 20_000;

fn make_listing(lines: usize) -> PageFixture {
    let line = LineFixture {
        spans: vec![
            SpanFixture {
                kind: SpanKind::Real,
                text: "let\u{00A0}total = rows.iter().map(|r| r.len()).sum::<usize>();".to_string(),
                scope: "source".to_string(),
            },
            SpanFixture {
                kind: SpanKind::Empty,
                text: "\u{00A0}".to_string(),
                scope: String::new(),
            },
        ],
    };
    PageFixture {
        header: false,
        table_mode: true,
        gutter: true,
        wrap_size: 900.0,
        tables: vec![TableFixture {
            start: 0,
            lines: vec![line; lines],
        }],
    }
}

fn make_page(lines: usize) -> PageState {
    let fixture = make_listing(lines);
    PageState::new(build_page(&fixture), page_config(&fixture)).expect("bench fixture indexes")
}

fn bench_index_small(c: &mut Criterion) {
    let fixture = make_listing(SMALL_LINES);
    let dom = build_page(&fixture);
    let config = page_config(&fixture);
    c.bench_function("bench_index_small", |b| {
        b.iter(|| {
            let page = PageState::new(black_box(dom.clone()), black_box(config.clone()));
            black_box(page.is_ok());
        });
    });
}

fn bench_index_large(c: &mut Criterion) {
    let fixture = make_listing(LARGE_LINES);
    let dom = build_page(&fixture);
    let config = page_config(&fixture);
    c.bench_function("bench_index_large", |b| {
        b.iter(|| {
            let page = PageState::new(black_box(dom.clone()), black_box(config.clone()));
            black_box(page.is_ok());
        });
    });
}

fn bench_plain_text_large(c: &mut Criterion) {
    let page = make_page(LARGE_LINES);
    c.bench_function("bench_plain_text_large", |b| {
        b.iter(|| {
            let text = black_box(&page).assemble_plain_text();
            black_box(text.len());
        });
    });
}

fn bench_wrap_toggle_large(c: &mut Criterion) {
    let mut page = make_page(LARGE_LINES);
    let metrics = FixtureMetrics::default();
    c.bench_function("bench_wrap_toggle_large", |b| {
        b.iter(|| {
            page.toggle_wrapping(black_box(&metrics));
            page.toggle_wrapping(black_box(&metrics));
        });
    });
}

criterion_group!(
    benches,
    bench_index_small,
    bench_index_large,
    bench_plain_text_large,
    bench_wrap_toggle_large
);
criterion_main!(benches);
