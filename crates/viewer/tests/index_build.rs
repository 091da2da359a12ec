use page_test_support::{annotated_listing, annotated_page, build_page, page_config};
use viewer::{IndexError, LineIndex, PageState};

#[test]
fn a_matching_page_indexes_every_declared_line() {
    let (dom, config) = annotated_page();
    let page = PageState::new(dom, config).unwrap();

    assert_eq!(page.index.tables.len(), 1);
    assert_eq!(page.index.line_count(), 3);
    assert!(page.index.rich_root.is_some());
    assert!(page.index.panel.is_some());
    assert!(page.index.dock.is_some());
    assert!(page.index.header.is_some());
    // One gutter cell per line in the sample.
    assert_eq!(page.index.gutter_cells.len(), 3);
    for (line, handle) in page.index.tables[0].lines.iter().enumerate() {
        assert_eq!(handle.line, line as u32);
        assert!(handle.gutter.is_some());
    }
}

#[test]
fn range_and_table_count_must_agree() {
    let (dom, mut config) = annotated_page();
    config.tables = 2;
    assert_eq!(
        PageState::new(dom, config).err().unwrap(),
        IndexError::TableCountMismatch {
            declared: 2,
            ranges: 1
        }
    );
}

#[test]
fn a_range_past_the_rendered_lines_names_the_missing_cell() {
    let (dom, mut config) = annotated_page();
    config.ranges[0].1 += 1;
    assert_eq!(
        PageState::new(dom, config).err().unwrap(),
        IndexError::MissingContentCell { table: 0, line: 3 }
    );
}

#[test]
fn a_declared_header_must_exist() {
    let mut fixture = annotated_listing();
    fixture.header = false;
    let dom = build_page(&fixture);
    let mut config = page_config(&fixture);
    config.header = true;
    assert_eq!(
        PageState::new(dom, config).err().unwrap(),
        IndexError::MissingHeader
    );
}

#[test]
fn a_declared_gutter_must_exist() {
    let mut fixture = annotated_listing();
    fixture.gutter = false;
    let dom = build_page(&fixture);
    let mut config = page_config(&fixture);
    config.gutter = true;
    assert_eq!(
        PageState::new(dom, config).err().unwrap(),
        IndexError::MissingGutterCell { table: 0, line: 0 }
    );
}

#[test]
fn index_errors_read_as_messages() {
    let err = IndexError::MissingContentCell { table: 1, line: 42 };
    assert_eq!(err.to_string(), "missing content cell C_1_42");
}

#[test]
fn building_directly_from_a_tree_matches_page_state() {
    let (dom, config) = annotated_page();
    let mut tree = dom.clone();
    dom::assign_node_ids(&mut tree);
    let index = LineIndex::build(&tree, &config).unwrap();
    assert_eq!(index.line_count(), 3);
}
