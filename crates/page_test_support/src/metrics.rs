use std::collections::HashMap;

use dom::Id;
use layout::{Axis, Metrics};

/// Scripted measurements standing in for the rendering engine. Tests set
/// exactly the dimensions the scenario needs; everything else reports the
/// default extent.
#[derive(Clone, Debug)]
pub struct FixtureMetrics {
    inner: Option<(f32, f32)>,
    root: Option<(f32, f32)>,
    body: (f32, f32),
    extents: HashMap<Id, (f32, f32)>,
    tops: HashMap<Id, f32>,
    parents: HashMap<Id, Id>,
    default_extent: (f32, f32),
}

impl Default for FixtureMetrics {
    fn default() -> Self {
        Self {
            inner: Some((1024.0, 768.0)),
            root: None,
            body: (1024.0, 768.0),
            extents: HashMap::new(),
            tops: HashMap::new(),
            parents: HashMap::new(),
            default_extent: (80.0, 16.0),
        }
    }
}

impl FixtureMetrics {
    pub fn with_inner(mut self, w: f32, h: f32) -> Self {
        self.inner = Some((w, h));
        self
    }

    /// Simulate an engine without window inner dimensions.
    pub fn without_inner(mut self) -> Self {
        self.inner = None;
        self
    }

    pub fn with_root_client(mut self, w: f32, h: f32) -> Self {
        self.root = Some((w, h));
        self
    }

    pub fn with_body_client(mut self, w: f32, h: f32) -> Self {
        self.body = (w, h);
        self
    }

    pub fn with_default_extent(mut self, w: f32, h: f32) -> Self {
        self.default_extent = (w, h);
        self
    }

    pub fn set_extent(&mut self, id: Id, w: f32, h: f32) {
        self.extents.insert(id, (w, h));
    }

    /// Place an element in the offset containment chain.
    pub fn set_offset(&mut self, id: Id, top: f32, parent: Option<Id>) {
        self.tops.insert(id, top);
        if let Some(p) = parent {
            self.parents.insert(id, p);
        }
    }

    fn pick(pair: (f32, f32), axis: Axis) -> f32 {
        match axis {
            Axis::X => pair.0,
            Axis::Y => pair.1,
        }
    }
}

impl Metrics for FixtureMetrics {
    fn window_inner(&self, axis: Axis) -> Option<f32> {
        self.inner.map(|p| Self::pick(p, axis))
    }

    fn root_client(&self, axis: Axis) -> Option<f32> {
        self.root.map(|p| Self::pick(p, axis))
    }

    fn body_client(&self, axis: Axis) -> f32 {
        Self::pick(self.body, axis)
    }

    fn offset_extent(&self, id: Id, axis: Axis) -> f32 {
        let pair = self.extents.get(&id).copied().unwrap_or(self.default_extent);
        Self::pick(pair, axis)
    }

    fn offset_top(&self, id: Id) -> f32 {
        self.tops.get(&id).copied().unwrap_or(0.0)
    }

    fn offset_parent(&self, id: Id) -> Option<Id> {
        self.parents.get(&id).copied()
    }
}
