/// Static description of the rendered listing, supplied by the host page
/// when the viewer is created. The wrap and gutter flags track the current
/// toggle state; the rest never changes after initialization.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Word-wrap currently applied to the code lines.
    pub wrap: bool,
    /// Per-table half-open line ranges `[start, end)`, one per table.
    pub ranges: Vec<(u32, u32)>,
    /// Content width in px that wrapped lines are constrained to.
    pub wrap_size: f32,
    /// Number of code tables on the page.
    pub tables: usize,
    /// Whether a `file_info` header element is present.
    pub header: bool,
    /// Whether the line-number gutter is currently shown.
    pub gutter: bool,
    /// Table rendering vs inline rendering of the listing.
    pub table_mode: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            wrap: false,
            ranges: Vec::new(),
            wrap_size: 900.0,
            tables: 0,
            header: false,
            gutter: false,
            table_mode: true,
        }
    }
}
