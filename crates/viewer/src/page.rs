use css::{HorizontalAnchor, VerticalAnchor};
use dom::{Id, Node, NodeIdAllocator, assign_node_ids, find_node_by_id, find_node_by_id_mut};
use layout::Metrics;
use schedule::DelayQueue;

use crate::config::PageConfig;
use crate::index::{IndexError, LineIndex};
use crate::plaintext::SavedRich;

/// Settle delay before measuring and placing the panel after a display
/// change; offset sizes are only meaningful once the element is laid out.
pub const PANEL_SETTLE_MS: u64 = 300;

/// Settle delay before re-running the wrap computation after the gutter's
/// presence changed.
pub const REWRAP_SETTLE_MS: u64 = 500;

/// Deferred continuations the viewer queues. One pending entry per kind:
/// re-triggering an interaction replaces the stale continuation instead of
/// running both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeferredAction {
    PositionPanel,
    Rewrap,
}

/// All mutable state of one viewed page: the document tree, the line
/// layout configuration, the handles resolved at initialization, and the
/// queue of settle-delay continuations.
pub struct PageState {
    pub dom: Node,
    pub config: PageConfig,
    pub index: LineIndex,
    /// Vertical scroll position the host should apply.
    pub scroll_y: f32,
    pub(crate) saved_rich: Option<SavedRich>,
    pub(crate) pending_placement: Option<(Option<HorizontalAnchor>, Option<VerticalAnchor>)>,
    pub(crate) ids: NodeIdAllocator,
    queue: DelayQueue<DeferredAction>,
}

impl PageState {
    /// Index the tree against the declared configuration and take ownership
    /// of both. Fails when the tree does not match what the config declares.
    pub fn new(mut dom: Node, config: PageConfig) -> Result<Self, IndexError> {
        let ids = assign_node_ids(&mut dom);
        let index = LineIndex::build(&dom, &config)?;
        log::debug!(
            target: "viewer",
            "page indexed: {} tables, {} lines, {} gutter cells",
            index.tables.len(),
            index.line_count(),
            index.gutter_cells.len(),
        );
        Ok(Self {
            dom,
            config,
            index,
            scroll_y: 0.0,
            saved_rich: None,
            pending_placement: None,
            ids,
            queue: DelayQueue::new(),
        })
    }

    /// Run every deferred continuation due at `now_ms`. The host calls this
    /// from its event loop; nothing here touches a clock.
    pub fn pump<M: Metrics>(&mut self, metrics: &M, now_ms: u64) {
        for action in self.queue.run_due(now_ms) {
            log::trace!(target: "viewer", "deferred {action:?} fires at {now_ms}ms");
            match action {
                DeferredAction::PositionPanel => self.apply_panel_placement(metrics),
                DeferredAction::Rewrap => self.wrap_lines(metrics),
            }
        }
    }

    /// Earliest queued deadline, for hosts that sleep between events.
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.next_due()
    }

    pub fn is_pending(&self, action: DeferredAction) -> bool {
        self.queue.is_pending(action)
    }

    pub(crate) fn defer(&mut self, action: DeferredAction, now_ms: u64, delay_ms: u64) {
        self.queue.schedule(action, now_ms, delay_ms);
    }

    /// Whether the plain-text view is currently swapped in.
    pub fn is_plain(&self) -> bool {
        self.saved_rich.is_some()
    }

    pub(crate) fn element(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.dom, id)
    }

    pub(crate) fn element_mut(&mut self, id: Id) -> Option<&mut Node> {
        find_node_by_id_mut(&mut self.dom, id)
    }
}
