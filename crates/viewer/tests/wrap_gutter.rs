use dom::dom_utils::{class_attr, style_prop};
use dom::find_node_by_id;
use page_test_support::{
    FixtureMetrics, annotated_listing, annotated_page, build_page, page_config,
    page_config_from_toml,
};
use viewer::{DeferredAction, PageState};

fn page() -> PageState {
    let (dom, config) = annotated_page();
    PageState::new(dom, config).unwrap()
}

fn content_styles(page: &PageState) -> Vec<(Option<String>, String)> {
    page.index
        .tables
        .iter()
        .flat_map(|t| t.lines.iter())
        .map(|h| {
            let el = find_node_by_id(&page.dom, h.content).unwrap();
            (
                style_prop(el, "width").map(str::to_string),
                class_attr(el).to_string(),
            )
        })
        .collect()
}

#[test]
fn wrapping_subtracts_the_measured_gutter_width() {
    let mut page = page();
    let gutter = page.index.first_line_gutter().unwrap();
    let mut metrics = FixtureMetrics::default();
    metrics.set_extent(gutter, 40.0, 16.0);

    page.toggle_wrapping(&metrics);
    assert!(page.config.wrap);

    for (width, class) in content_styles(&page) {
        assert_eq!(width.as_deref(), Some("860px"));
        assert_eq!(class, "wrap");
    }

    let header = page.index.header.unwrap();
    let el = find_node_by_id(&page.dom, header).unwrap();
    assert_eq!(style_prop(el, "width"), Some("900px"));
    assert_eq!(class_attr(el), "wrap");
}

#[test]
fn unwrapping_restores_full_width_and_clears_classes() {
    let mut page = page();
    let metrics = FixtureMetrics::default();

    page.toggle_wrapping(&metrics);
    page.toggle_wrapping(&metrics);
    assert!(!page.config.wrap);

    for (width, class) in content_styles(&page) {
        assert_eq!(width.as_deref(), Some("100%"));
        assert_eq!(class, "");
    }

    let header = page.index.header.unwrap();
    let el = find_node_by_id(&page.dom, header).unwrap();
    assert_eq!(style_prop(el, "width"), Some("100%"));
}

#[test]
fn inline_mode_keeps_the_line_class_while_wrapped() {
    let mut fixture = annotated_listing();
    fixture.table_mode = false;
    let mut page = PageState::new(build_page(&fixture), page_config(&fixture)).unwrap();
    let metrics = FixtureMetrics::default();

    page.toggle_wrapping(&metrics);
    for (_, class) in content_styles(&page) {
        assert_eq!(class, "wrap code_line");
    }
}

#[test]
fn gutter_double_toggle_restores_the_flag() {
    let mut page = page();
    assert!(page.config.gutter);

    page.toggle_gutter(0);
    assert!(!page.config.gutter);
    for &id in &page.index.gutter_cells {
        let el = find_node_by_id(&page.dom, id).unwrap();
        assert_eq!(style_prop(el, "display"), Some("none"));
    }

    page.toggle_gutter(1000);
    assert!(page.config.gutter);
    for &id in &page.index.gutter_cells {
        let el = find_node_by_id(&page.dom, id).unwrap();
        // Gutters re-show inline-block even on a table-mode page, where
        // table-cell would match the markup; this pins the inline-block
        // choice rather than the alternative reading.
        assert_eq!(style_prop(el, "display"), Some("inline-block"));
    }
}

#[test]
fn hiding_the_gutter_widens_wrapped_lines_after_settle() {
    let mut page = page();
    let gutter = page.index.first_line_gutter().unwrap();
    let mut metrics = FixtureMetrics::default();
    metrics.set_extent(gutter, 40.0, 16.0);

    page.toggle_wrapping(&metrics);
    for (width, _) in content_styles(&page) {
        assert_eq!(width.as_deref(), Some("860px"));
    }

    page.toggle_gutter(0);
    assert!(page.is_pending(DeferredAction::Rewrap));

    page.pump(&metrics, 499);
    for (width, _) in content_styles(&page) {
        assert_eq!(width.as_deref(), Some("860px"), "re-wrap must wait for settle");
    }

    page.pump(&metrics, 500);
    for (width, _) in content_styles(&page) {
        assert_eq!(width.as_deref(), Some("900px"));
    }
}

#[test]
fn gutter_flapping_leaves_one_pending_rewrap() {
    let mut page = page();
    let metrics = FixtureMetrics::default();

    page.toggle_wrapping(&metrics);
    page.toggle_gutter(0);
    page.toggle_gutter(100);

    // Only the replacement deadline remains.
    assert_eq!(page.next_deadline(), Some(600));
    page.pump(&metrics, 600);
    assert!(!page.is_pending(DeferredAction::Rewrap));
}

#[test]
fn unwrapped_pages_do_not_schedule_rewrap() {
    let mut page = page();
    page.toggle_gutter(0);
    assert!(!page.is_pending(DeferredAction::Rewrap));
}

#[test]
fn host_config_loads_from_toml() {
    let config = page_config_from_toml(
        r#"
            wrap = false
            ranges = [[0, 3]]
            wrap_size = 900.0
            tables = 1
            header = true
            gutter = true
        "#,
    )
    .expect("config TOML parses");

    let (dom, _) = annotated_page();
    let page = PageState::new(dom, config).unwrap();
    assert_eq!(page.index.line_count(), 3);
}
