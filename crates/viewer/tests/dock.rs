use css::{HorizontalAnchor, VerticalAnchor};
use dom::dom_utils::{get_attr, has_attr, remove_attr, set_attr, style_prop};
use dom::find_node_by_id_mut;
use page_test_support::{FixtureMetrics, annotated_page};
use viewer::{DeferredAction, PageState, dock_preset};

fn page() -> PageState {
    let (dom, config) = annotated_page();
    PageState::new(dom, config).unwrap()
}

/// Move the dock selector's selected marker to the option with `value`.
fn choose_dock_option(page: &mut PageState, value: &str) {
    let dock = page.index.dock.expect("sample page has a dock selector");
    let select = find_node_by_id_mut(&mut page.dom, dock).unwrap();
    let options = select.children_mut().unwrap();
    for opt in options.iter_mut() {
        if has_attr(opt, "selected") {
            remove_attr(opt, "selected");
        }
        if get_attr(opt, "value") == Some(value) {
            set_attr(opt, "selected", "selected");
        }
    }
}

#[test]
fn the_nine_presets_match_the_fixed_table() {
    use HorizontalAnchor::{Center as XCenter, Left, Right};
    use VerticalAnchor::{Bottom, Center as YCenter, Top};

    let expected = [
        (XCenter, YCenter),
        (XCenter, Top),
        (XCenter, Bottom),
        (Left, YCenter),
        (Right, YCenter),
        (Left, Top),
        (Right, Top),
        (Left, Bottom),
        (Right, Bottom),
    ];
    for (i, pair) in expected.iter().enumerate() {
        assert_eq!(dock_preset(&i.to_string()), Some(*pair), "option {i}");
    }
}

#[test]
fn unknown_options_map_to_no_placement() {
    for value in ["9", "-1", "x", ""] {
        assert_eq!(dock_preset(value), None, "option {value:?}");
    }
}

#[test]
fn panel_is_placed_only_after_the_settle_delay() {
    let mut page = page();
    let panel = page.index.panel.unwrap();
    let mut metrics = FixtureMetrics::default().with_inner(1024.0, 768.0);
    metrics.set_extent(panel, 200.0, 100.0);

    page.toggle_annotations(0);
    // Shown synchronously; the placement itself waits for layout to settle.
    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    assert_eq!(style_prop(el, "display"), Some("block"));

    page.pump(&metrics, 299);
    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    assert_eq!(style_prop(el, "top"), None, "placement must wait for settle");

    page.pump(&metrics, 300);
    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    // Default option 0 is center/center: (768-100)/2 and (1024-200)/2.
    assert_eq!(style_prop(el, "top"), Some("334px"));
    assert_eq!(style_prop(el, "left"), Some("412px"));
    assert_eq!(style_prop(el, "visibility"), Some("visible"));
    assert_eq!(style_prop(el, "display"), Some("block"));
}

#[test]
fn toggling_annotations_flips_between_shown_and_hidden() {
    let mut page = page();
    let panel = page.index.panel.unwrap();
    let metrics = FixtureMetrics::default();

    // The sample panel starts hidden (inline display: none).
    page.toggle_annotations(0);
    page.pump(&metrics, 300);
    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    assert_eq!(style_prop(el, "display"), Some("block"));

    page.toggle_annotations(1000);
    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    assert_eq!(style_prop(el, "display"), Some("none"));
    assert_eq!(style_prop(el, "visibility"), Some("hidden"));
}

#[test]
fn edge_presets_use_the_far_edge_offsets() {
    let mut page = page();
    let panel = page.index.panel.unwrap();
    let mut metrics = FixtureMetrics::default().with_inner(1024.0, 768.0);
    metrics.set_extent(panel, 200.0, 100.0);

    choose_dock_option(&mut page, "8"); // right/bottom
    page.toggle_annotations(0);
    page.pump(&metrics, 300);

    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    assert_eq!(style_prop(el, "left"), Some("824px"));
    assert_eq!(style_prop(el, "top"), Some("668px"));
}

#[test]
fn oversized_panels_clamp_to_the_origin() {
    let mut page = page();
    let panel = page.index.panel.unwrap();
    let mut metrics = FixtureMetrics::default().with_inner(300.0, 200.0);
    metrics.set_extent(panel, 800.0, 600.0);

    choose_dock_option(&mut page, "0");
    page.toggle_annotations(0);
    page.pump(&metrics, 300);

    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    assert_eq!(style_prop(el, "top"), Some("0px"));
    assert_eq!(style_prop(el, "left"), Some("0px"));
}

#[test]
fn an_unmapped_option_still_shows_the_panel() {
    let mut page = page();
    let panel = page.index.panel.unwrap();
    let metrics = FixtureMetrics::default();

    // An option value outside the preset table leaves both axes unset.
    let dock = page.index.dock.unwrap();
    let select = find_node_by_id_mut(&mut page.dom, dock).unwrap();
    for opt in select.children_mut().unwrap().iter_mut() {
        if has_attr(opt, "selected") {
            set_attr(opt, "value", "42");
        }
    }

    page.toggle_annotations(0);
    page.pump(&metrics, 300);

    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    assert_eq!(style_prop(el, "top"), None);
    assert_eq!(style_prop(el, "left"), None);
    assert_eq!(style_prop(el, "visibility"), Some("visible"));
}

#[test]
fn legacy_engines_fall_back_to_client_dimensions() {
    let mut page = page();
    let panel = page.index.panel.unwrap();
    let mut metrics = FixtureMetrics::default()
        .without_inner()
        .with_root_client(600.0, 400.0);
    metrics.set_extent(panel, 200.0, 100.0);

    page.toggle_annotations(0);
    page.pump(&metrics, 300);
    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    assert_eq!(style_prop(el, "top"), Some("150px"));
    assert_eq!(style_prop(el, "left"), Some("200px"));

    // No root client dimension either: the body is the last resort.
    let mut metrics = FixtureMetrics::default()
        .without_inner()
        .with_body_client(500.0, 300.0);
    metrics.set_extent(panel, 200.0, 100.0);
    page.dock_panel(1000);
    page.pump(&metrics, 1300);
    let el = dom::find_node_by_id(&page.dom, panel).unwrap();
    assert_eq!(style_prop(el, "top"), Some("100px"));
    assert_eq!(style_prop(el, "left"), Some("150px"));
}

#[test]
fn retriggering_replaces_the_pending_placement() {
    let mut page = page();
    let metrics = FixtureMetrics::default();

    page.position_panel(0);
    page.position_panel(100); // deadline moves to 400
    assert!(page.is_pending(DeferredAction::PositionPanel));

    page.pump(&metrics, 350);
    assert!(
        page.is_pending(DeferredAction::PositionPanel),
        "stale deadline must not fire after a re-trigger"
    );

    page.pump(&metrics, 400);
    assert!(!page.is_pending(DeferredAction::PositionPanel));
}

#[test]
fn scroll_to_line_centers_the_target() {
    let mut page = page();
    let content = page.index.handle(0, 1).unwrap().content;
    let mut metrics = FixtureMetrics::default().with_inner(1280.0, 800.0);

    // Three offset parents deep, cumulative 1000px.
    let (p1, p2, p3) = (dom::Id(9001), dom::Id(9002), dom::Id(9003));
    metrics.set_offset(content, 600.0, Some(p1));
    metrics.set_offset(p1, 250.0, Some(p2));
    metrics.set_offset(p2, 100.0, Some(p3));
    metrics.set_offset(p3, 50.0, None);

    assert!(page.scroll_to_line(&metrics, 0, 1));
    assert_eq!(page.scroll_y, 600.0);
}

#[test]
fn scroll_to_unknown_line_is_refused() {
    let mut page = page();
    let metrics = FixtureMetrics::default();
    assert!(!page.scroll_to_line(&metrics, 0, 99));
    assert!(!page.scroll_to_line(&metrics, 7, 0));
}
