use css::{Display, HorizontalAnchor, VerticalAnchor, parse_display};
use dom::dom_utils::{get_attr, has_attr, set_style_prop, style_prop};
use dom::Node;
use layout::{Metrics, scroll_target};

use crate::page::{DeferredAction, PANEL_SETTLE_MS, PageState};
use crate::position;

/// The nine viewport-relative presets the dock selector offers, in option
/// order: 0 center/center, 1 center/top, 2 center/bottom, 3 left/center,
/// 4 right/center, 5 left/top, 6 right/top, 7 left/bottom, 8 right/bottom.
const DOCK_PRESETS: [(HorizontalAnchor, VerticalAnchor); 9] = [
    (HorizontalAnchor::Center, VerticalAnchor::Center),
    (HorizontalAnchor::Center, VerticalAnchor::Top),
    (HorizontalAnchor::Center, VerticalAnchor::Bottom),
    (HorizontalAnchor::Left, VerticalAnchor::Center),
    (HorizontalAnchor::Right, VerticalAnchor::Center),
    (HorizontalAnchor::Left, VerticalAnchor::Top),
    (HorizontalAnchor::Right, VerticalAnchor::Top),
    (HorizontalAnchor::Left, VerticalAnchor::Bottom),
    (HorizontalAnchor::Right, VerticalAnchor::Bottom),
];

/// Map a dock option value ("0"–"8") to its placement pair.
/// Anything else yields `None` and leaves both axes unset.
pub fn dock_preset(option: &str) -> Option<(HorizontalAnchor, VerticalAnchor)> {
    let idx: usize = option.trim().parse().ok()?;
    DOCK_PRESETS.get(idx).copied()
}

fn selected_option_value(select: &Node) -> Option<&str> {
    let children = select.children()?;
    let options = children
        .iter()
        .filter(|c| c.name().is_some_and(|n| n.eq_ignore_ascii_case("option")));
    // The engine's selectedIndex falls back to the first option when none
    // carries the selected marker.
    let mut first = None;
    for opt in options {
        if first.is_none() {
            first = Some(opt);
        }
        if has_attr(opt, "selected") {
            return get_attr(opt, "value");
        }
    }
    first.and_then(|opt| get_attr(opt, "value"))
}

impl PageState {
    /// Value of the dock selector's chosen option, if the control exists.
    pub fn selected_dock_option(&self) -> Option<String> {
        let select = self.element(self.index.dock?)?;
        selected_option_value(select).map(str::to_string)
    }

    /// Read the chosen dock option now, then queue the placement to run
    /// after the settle delay, when offset sizes are meaningful again.
    /// A second call before the delay elapses replaces the pending one.
    pub fn position_panel(&mut self, now_ms: u64) {
        let placement = self.selected_dock_option().as_deref().and_then(dock_preset);
        let (x, y) = match placement {
            Some((x, y)) => (Some(x), Some(y)),
            None => (None, None),
        };
        log::trace!(target: "viewer.dock", "queue panel placement {x:?}/{y:?}");
        self.pending_placement = Some((x, y));
        self.defer(DeferredAction::PositionPanel, now_ms, PANEL_SETTLE_MS);
    }

    /// Re-dock the already-visible panel, e.g. from the selector's change
    /// handler.
    pub fn dock_panel(&mut self, now_ms: u64) {
        self.position_panel(now_ms);
    }

    /// Show the panel (and queue its placement) when it is hidden; hide it
    /// otherwise. The `display` style is the toggle state signal.
    pub fn toggle_annotations(&mut self, now_ms: u64) {
        let Some(panel) = self.index.panel else {
            log::warn!(target: "viewer.dock", "no annotation panel on this page");
            return;
        };
        let hidden = self
            .element(panel)
            .and_then(|el| style_prop(el, "display"))
            .and_then(parse_display)
            == Some(Display::None);

        if let Some(el) = self.element_mut(panel) {
            if hidden {
                set_style_prop(el, "display", Display::Block.as_css());
            } else {
                set_style_prop(el, "visibility", "hidden");
                set_style_prop(el, "display", Display::None.as_css());
            }
        }
        log::debug!(target: "viewer.dock", "annotation panel {}", if hidden { "shown" } else { "hidden" });
        if hidden {
            self.position_panel(now_ms);
        }
    }

    /// The deferred half of `position_panel`.
    pub(crate) fn apply_panel_placement<M: Metrics>(&mut self, metrics: &M) {
        let Some(panel) = self.index.panel else {
            return;
        };
        let (x, y) = self.pending_placement.take().unwrap_or((None, None));
        position::set(&mut self.dom, metrics, panel, x, y);
        if let Some(el) = self.element_mut(panel) {
            set_style_prop(el, "visibility", "visible");
        }
    }

    /// Scroll so the given line is vertically centered: accumulate offsets
    /// up the containment chain, back off by half the viewport, clamp at
    /// zero. Returns whether the line exists.
    pub fn scroll_to_line<M: Metrics>(&mut self, metrics: &M, table: usize, line: u32) -> bool {
        let Some(handle) = self.index.handle(table, line) else {
            log::warn!(target: "viewer.dock", "scroll target {table}/{line} outside declared ranges");
            return false;
        };
        let content = handle.content;
        self.scroll_y = scroll_target(metrics, content);
        log::debug!(target: "viewer.dock", "scroll to line {table}/{line} -> {}px", self.scroll_y);
        true
    }
}
