use css::{Display, Length};
use dom::dom_utils::{set_class, set_style_prop};
use dom::Id;
use layout::{Axis, Metrics};

use crate::index::LINE_CLASS;
use crate::page::{DeferredAction, PageState, REWRAP_SETTLE_MS};

const WRAP_CLASS: &str = "wrap";
const FULL_WIDTH: &str = "100%";

impl PageState {
    /// Flip between wrapped and unwrapped rendering of every indexed line.
    pub fn toggle_wrapping<M: Metrics>(&mut self, metrics: &M) {
        if self.config.wrap {
            self.config.wrap = false;
            self.unwrap_lines();
        } else {
            self.config.wrap = true;
            self.wrap_lines(metrics);
        }
    }

    /// Constrain every content cell to the configured wrap width, minus the
    /// gutter's measured width when the gutter is shown. Also runs deferred
    /// after a gutter toggle, once the layout has settled.
    pub(crate) fn wrap_lines<M: Metrics>(&mut self, metrics: &M) {
        // One sample: the first line's gutter cell stands in for all of them.
        let gutter_width = if self.config.gutter {
            self.index
                .first_line_gutter()
                .map(|id| metrics.offset_extent(id, Axis::X))
                .unwrap_or(0.0)
        } else {
            0.0
        };

        if self.config.header {
            if let Some(header) = self.index.header {
                let width = Length::px(self.config.wrap_size).to_string();
                if let Some(el) = self.element_mut(header) {
                    set_style_prop(el, "width", &width);
                    set_class(el, WRAP_CLASS);
                }
            }
        }

        let content_width = Length::px(self.config.wrap_size - gutter_width).to_string();
        let class = if self.config.table_mode {
            WRAP_CLASS.to_string()
        } else {
            format!("{WRAP_CLASS} {LINE_CLASS}")
        };

        log::debug!(
            target: "viewer.lines",
            "wrap lines to {content_width} (gutter {gutter_width}px)"
        );
        for id in self.content_cells() {
            if let Some(el) = self.element_mut(id) {
                set_style_prop(el, "width", &content_width);
                set_class(el, &class);
            }
        }
    }

    /// Reset every content cell to full width with no class.
    fn unwrap_lines(&mut self) {
        if self.config.header {
            if let Some(header) = self.index.header {
                if let Some(el) = self.element_mut(header) {
                    set_style_prop(el, "width", FULL_WIDTH);
                }
            }
        }

        log::debug!(target: "viewer.lines", "unwrap lines");
        for id in self.content_cells() {
            if let Some(el) = self.element_mut(id) {
                set_style_prop(el, "width", FULL_WIDTH);
                set_class(el, "");
            }
        }
    }

    /// Show or hide every element carrying the gutter marker class. When
    /// wrapping is active, queues a re-wrap so content widths reaccount for
    /// the gutter once the layout settles; toggling again first replaces
    /// the queued re-wrap.
    pub fn toggle_gutter(&mut self, now_ms: u64) {
        if self.index.gutter_cells.is_empty() {
            // Nothing to flip; the flag stays untouched too.
            log::warn!(target: "viewer.lines", "page has no gutter cells");
            return;
        }
        let mode = if self.config.gutter {
            self.config.gutter = false;
            Display::None
        } else {
            self.config.gutter = true;
            // Re-show is always inline-block; a table-mode page could
            // equally argue for table-cell here.
            Display::InlineBlock
        };

        log::debug!(target: "viewer.lines", "gutter -> {}", mode.as_css());
        let cells = self.index.gutter_cells.clone();
        for id in cells {
            if let Some(el) = self.element_mut(id) {
                set_style_prop(el, "display", mode.as_css());
            }
        }

        if self.config.wrap {
            self.defer(DeferredAction::Rewrap, now_ms, REWRAP_SETTLE_MS);
        }
    }

    fn content_cells(&self) -> Vec<Id> {
        self.index
            .tables
            .iter()
            .flat_map(|t| t.lines.iter().map(|h| h.content))
            .collect()
    }
}
