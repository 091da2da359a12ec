use std::collections::HashMap;
use std::fmt;

use dom::dom_utils::{get_attr, has_class};
use dom::traverse::for_each_element;
use dom::{Id, Node};

use crate::config::PageConfig;

// Markup-level naming convention of the generated listing.
pub const CONTENT_CELL_PREFIX: &str = "C";
pub const GUTTER_CELL_PREFIX: &str = "L";
pub const GUTTER_CLASS: &str = "code_gutter";
pub const LINE_CLASS: &str = "code_line";
pub const REAL_TEXT_CLASS: &str = "real_text";
pub const EMPTY_TEXT_CLASS: &str = "empty_text";
pub const PANEL_DOM_ID: &str = "comment_list";
pub const DOCK_DOM_ID: &str = "dock";
pub const HEADER_DOM_ID: &str = "file_info";
pub const RICH_ROOT_CLASS: &str = "code_page";
pub const PLAIN_ROOT_CLASS: &str = "simple_code_page";

pub fn content_cell_name(table: usize, line: u32) -> String {
    format!("{CONTENT_CELL_PREFIX}_{table}_{line}")
}

pub fn gutter_cell_name(table: usize, line: u32) -> String {
    format!("{GUTTER_CELL_PREFIX}_{table}_{line}")
}

/// Resolved handles for one rendered code line.
#[derive(Clone, Copy, Debug)]
pub struct LineHandle {
    pub line: u32,
    pub content: Id,
    pub gutter: Option<Id>,
}

#[derive(Clone, Debug)]
pub struct TableLines {
    pub range: (u32, u32),
    pub lines: Vec<LineHandle>,
}

impl TableLines {
    pub fn handle(&self, line: u32) -> Option<&LineHandle> {
        let (start, end) = self.range;
        if line < start || line >= end {
            return None;
        }
        self.lines.get((line - start) as usize)
    }
}

/// Element handles resolved once at initialization, so handlers never
/// re-derive markup-id strings per access. Built from the declared ranges;
/// building validates that the tree matches the configuration.
#[derive(Clone, Debug)]
pub struct LineIndex {
    pub tables: Vec<TableLines>,
    /// Every element carrying the gutter marker class, in document order.
    pub gutter_cells: Vec<Id>,
    pub body: Id,
    pub rich_root: Option<Id>,
    pub panel: Option<Id>,
    pub dock: Option<Id>,
    pub header: Option<Id>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    TableCountMismatch { declared: usize, ranges: usize },
    MissingBody,
    MissingHeader,
    MissingContentCell { table: usize, line: u32 },
    MissingGutterCell { table: usize, line: u32 },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::TableCountMismatch { declared, ranges } => write!(
                f,
                "config declares {declared} tables but {ranges} line ranges"
            ),
            IndexError::MissingBody => write!(f, "page has no body element"),
            IndexError::MissingHeader => {
                write!(f, "config declares a header but no {HEADER_DOM_ID} element exists")
            }
            IndexError::MissingContentCell { table, line } => {
                write!(f, "missing content cell {}", content_cell_name(*table, *line))
            }
            IndexError::MissingGutterCell { table, line } => {
                write!(f, "missing gutter cell {}", gutter_cell_name(*table, *line))
            }
        }
    }
}

impl std::error::Error for IndexError {}

impl LineIndex {
    pub fn build(dom: &Node, config: &PageConfig) -> Result<Self, IndexError> {
        if config.ranges.len() != config.tables {
            return Err(IndexError::TableCountMismatch {
                declared: config.tables,
                ranges: config.ranges.len(),
            });
        }

        // Single pass over the tree: markup id -> tree id, plus the
        // class-marked elements the toggles operate on.
        let mut by_dom_id: HashMap<String, Id> = HashMap::new();
        let mut gutter_cells = Vec::new();
        let mut body = None;
        let mut rich_root = None;
        for_each_element(dom, &mut |el| {
            if let Some(dom_id) = get_attr(el, "id") {
                by_dom_id.entry(dom_id.to_string()).or_insert(el.id());
            }
            if has_class(el, GUTTER_CLASS) {
                gutter_cells.push(el.id());
            }
            if body.is_none() && el.name().is_some_and(|n| n.eq_ignore_ascii_case("body")) {
                body = Some(el.id());
            }
            if rich_root.is_none()
                && el.name().is_some_and(|n| n.eq_ignore_ascii_case("pre"))
                && has_class(el, RICH_ROOT_CLASS)
            {
                rich_root = Some(el.id());
            }
        });

        let body = body.ok_or(IndexError::MissingBody)?;

        let header = by_dom_id.get(HEADER_DOM_ID).copied();
        if config.header && header.is_none() {
            return Err(IndexError::MissingHeader);
        }

        let mut tables = Vec::with_capacity(config.tables);
        for (table, &(start, end)) in config.ranges.iter().enumerate() {
            let mut lines = Vec::with_capacity(end.saturating_sub(start) as usize);
            for line in start..end {
                let content = by_dom_id
                    .get(&content_cell_name(table, line))
                    .copied()
                    .ok_or(IndexError::MissingContentCell { table, line })?;
                let gutter = by_dom_id.get(&gutter_cell_name(table, line)).copied();
                if config.gutter && gutter.is_none() {
                    return Err(IndexError::MissingGutterCell { table, line });
                }
                lines.push(LineHandle {
                    line,
                    content,
                    gutter,
                });
            }
            tables.push(TableLines {
                range: (start, end),
                lines,
            });
        }

        Ok(Self {
            tables,
            gutter_cells,
            body,
            rich_root,
            panel: by_dom_id.get(PANEL_DOM_ID).copied(),
            dock: by_dom_id.get(DOCK_DOM_ID).copied(),
            header,
        })
    }

    /// Handle for a (table, line) pair, if the pair is within the
    /// declared ranges.
    pub fn handle(&self, table: usize, line: u32) -> Option<&LineHandle> {
        self.tables.get(table)?.handle(line)
    }

    /// First line cell that has a gutter neighbor; its width is the sample
    /// used when computing the wrapped content width.
    pub fn first_line_gutter(&self) -> Option<Id> {
        self.tables
            .iter()
            .flat_map(|t| t.lines.iter())
            .find_map(|h| h.gutter)
    }

    pub fn line_count(&self) -> usize {
        self.tables.iter().map(|t| t.lines.len()).sum()
    }
}
