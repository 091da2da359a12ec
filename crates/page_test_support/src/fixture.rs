use serde::Deserialize;

use dom::{Id, Node};
use viewer::PageConfig;
use viewer::index::{
    DOCK_DOM_ID, GUTTER_CLASS, HEADER_DOM_ID, LINE_CLASS, PANEL_DOM_ID, RICH_ROOT_CLASS,
    content_cell_name, gutter_cell_name,
};

/// Declarative description of a rendered code page, loadable from JSON,
/// from which `build_page` produces the markup tree the exporter would
/// have emitted.
#[derive(Clone, Debug, Deserialize)]
pub struct PageFixture {
    #[serde(default)]
    pub header: bool,
    #[serde(default = "default_true")]
    pub table_mode: bool,
    #[serde(default)]
    pub gutter: bool,
    #[serde(default = "default_wrap_size")]
    pub wrap_size: f32,
    pub tables: Vec<TableFixture>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TableFixture {
    #[serde(default)]
    pub start: u32,
    pub lines: Vec<LineFixture>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LineFixture {
    pub spans: Vec<SpanFixture>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SpanFixture {
    pub kind: SpanKind,
    pub text: String,
    /// Syntax-scope class the highlighter put on the span, if any.
    #[serde(default)]
    pub scope: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Real,
    Empty,
}

fn default_true() -> bool {
    true
}

fn default_wrap_size() -> f32 {
    900.0
}

pub fn parse_page_fixture(json: &str) -> serde_json::Result<PageFixture> {
    serde_json::from_str(json)
}

/// Page line configuration matching what `build_page` emits for the fixture.
pub fn page_config(fixture: &PageFixture) -> PageConfig {
    PageConfig {
        wrap: false,
        ranges: fixture
            .tables
            .iter()
            .map(|t| (t.start, t.start + t.lines.len() as u32))
            .collect(),
        wrap_size: fixture.wrap_size,
        tables: fixture.tables.len(),
        header: fixture.header,
        gutter: fixture.gutter,
        table_mode: fixture.table_mode,
    }
}

fn el(name: &str, attributes: Vec<(String, Option<String>)>, children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(0),
        name: name.to_string(),
        attributes,
        style: Vec::new(),
        children,
    }
}

fn attr(key: &str, value: &str) -> (String, Option<String>) {
    (key.to_string(), Some(value.to_string()))
}

fn text(t: &str) -> Node {
    Node::Text {
        id: Id(0),
        text: t.to_string(),
    }
}

fn span_class(span: &SpanFixture) -> String {
    let marker = match span.kind {
        SpanKind::Real => "real_text",
        SpanKind::Empty => "empty_text",
    };
    if span.scope.is_empty() {
        marker.to_string()
    } else {
        format!("{} {marker}", span.scope)
    }
}

fn code_spans(line: &LineFixture) -> Vec<Node> {
    line.spans
        .iter()
        .map(|s| el("span", vec![attr("class", &span_class(s))], vec![text(&s.text)]))
        .collect()
}

fn table_row(table: usize, line_no: u32, line: &LineFixture, gutter: bool) -> Node {
    let gutter_td = el(
        "td",
        vec![
            attr("id", &gutter_cell_name(table, line_no)),
            attr("class", &format!("code_text {GUTTER_CLASS}")),
        ],
        vec![el("span", Vec::new(), vec![text(&format!("{line_no}"))])],
    );
    let mut content_children = code_spans(line);
    content_children.push(text("\n"));
    let content_td = el(
        "td",
        vec![attr("class", &format!("code_text {LINE_CLASS}"))],
        vec![el(
            "div",
            vec![attr("id", &content_cell_name(table, line_no))],
            content_children,
        )],
    );
    let cells = if gutter {
        vec![gutter_td, content_td]
    } else {
        vec![content_td]
    };
    el("tr", Vec::new(), cells)
}

fn inline_line(table: usize, line_no: u32, line: &LineFixture, gutter: bool) -> Vec<Node> {
    let mut out = Vec::new();
    if gutter {
        out.push(el(
            "span",
            vec![
                attr("id", &gutter_cell_name(table, line_no)),
                attr("class", &format!("code_text {GUTTER_CLASS}")),
            ],
            vec![text(&format!("{line_no}"))],
        ));
    }
    out.push(el(
        "span",
        vec![
            attr("id", &content_cell_name(table, line_no)),
            attr("class", LINE_CLASS),
        ],
        code_spans(line),
    ));
    out.push(text("\n"));
    out
}

fn dock_select() -> Node {
    let options = (0..9)
        .map(|i| {
            let mut attrs = vec![attr("value", &i.to_string())];
            if i == 0 {
                attrs.push(("selected".to_string(), None));
            }
            el("option", attrs, vec![text(&format!("position {i}"))])
        })
        .collect();
    el("select", vec![attr("id", DOCK_DOM_ID)], options)
}

/// Build the markup tree for a fixture: body, optional header, dock
/// selector, hidden annotation panel, and the rich listing root holding
/// one table (or inline run) per table fixture.
pub fn build_page(fixture: &PageFixture) -> Node {
    let mut listing_children = Vec::new();
    for (t, table) in fixture.tables.iter().enumerate() {
        if fixture.table_mode {
            let rows = table
                .lines
                .iter()
                .enumerate()
                .map(|(i, line)| table_row(t, table.start + i as u32, line, fixture.gutter))
                .collect();
            listing_children.push(el(
                "table",
                vec![attr("class", RICH_ROOT_CLASS), attr("cellspacing", "0")],
                rows,
            ));
        } else {
            let mut run = Vec::new();
            for (i, line) in table.lines.iter().enumerate() {
                run.extend(inline_line(t, table.start + i as u32, line, fixture.gutter));
            }
            listing_children.push(el("code", vec![attr("class", RICH_ROOT_CLASS)], run));
        }
    }

    let mut body_children = Vec::new();
    if fixture.header {
        body_children.push(el(
            "div",
            vec![attr("id", HEADER_DOM_ID)],
            vec![text("fixture.rs 01/01/26")],
        ));
    }
    body_children.push(el(
        "pre",
        vec![attr("class", RICH_ROOT_CLASS)],
        listing_children,
    ));
    body_children.push(dock_select());
    let mut panel = el(
        "div",
        vec![attr("id", PANEL_DOM_ID)],
        vec![text("annotations")],
    );
    if let Node::Element { style, .. } = &mut panel {
        style.push(("display".to_string(), "none".to_string()));
    }
    body_children.push(panel);

    let body = el(
        "body",
        vec![attr("class", "code_page code_text")],
        body_children,
    );
    Node::Document {
        id: Id(0),
        doctype: Some("html".to_string()),
        children: vec![el("html", Vec::new(), vec![body])],
    }
}

/// Deserialize a `PageConfig` from the TOML form host pages ship.
pub fn page_config_from_toml(input: &str) -> Result<PageConfig, toml::de::Error> {
    #[derive(Deserialize)]
    struct RawConfig {
        #[serde(default)]
        wrap: bool,
        #[serde(default)]
        ranges: Vec<[u32; 2]>,
        #[serde(default = "default_wrap_size")]
        wrap_size: f32,
        #[serde(default)]
        tables: usize,
        #[serde(default)]
        header: bool,
        #[serde(default)]
        gutter: bool,
        #[serde(default = "default_true")]
        table_mode: bool,
    }

    let raw: RawConfig = toml::from_str(input)?;
    Ok(PageConfig {
        wrap: raw.wrap,
        ranges: raw.ranges.iter().map(|r| (r[0], r[1])).collect(),
        wrap_size: raw.wrap_size,
        tables: raw.tables,
        header: raw.header,
        gutter: raw.gutter,
        table_mode: raw.table_mode,
    })
}
