use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use page_test_support::{FixtureMetrics, annotated_page};
use viewer::PageState;

fn main() {
    let (dom, config) = annotated_page();
    let mut page = PageState::new(dom, config).expect("sample page matches its config");
    let metrics = FixtureMetrics::default().with_inner(1024.0, 768.0);

    println!("indexed lines: {}", page.index.line_count());

    println!("\n--- plain text view ---");
    print!("{}", page.assemble_plain_text());
    page.toggle_plain_text();
    println!("mode class: {}", page.body_mode_class());
    page.toggle_plain_text();
    println!("mode class: {}", page.body_mode_class());

    println!("\n--- wrap and gutter toggles ---");
    page.toggle_wrapping(&metrics);
    println!("wrap: {}", page.config.wrap);
    page.toggle_gutter(0);
    println!("gutter: {}", page.config.gutter);

    // Drive the settle-delay continuations the way a host event loop would.
    let mut now = 0;
    while let Some(deadline) = page.next_deadline() {
        now = deadline;
        page.pump(&metrics, now);
    }
    println!("settled at {now}ms");

    println!("\n--- annotation panel ---");
    page.toggle_annotations(now);
    while let Some(deadline) = page.next_deadline() {
        now = deadline;
        page.pump(&metrics, now);
    }
    println!("panel docked at {now}ms");

    page.scroll_to_line(&metrics, 0, 2);
    println!("scrolled to {}px", page.scroll_y);
}
