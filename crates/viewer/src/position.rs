use css::{HorizontalAnchor, Length, VerticalAnchor};
use dom::dom_utils::set_style_prop;
use dom::{Id, Node, find_node_by_id_mut};
use layout::{AnchorOffset, Axis, Metrics, horizontal_offset, vertical_offset};

fn offset_css(offset: AnchorOffset) -> String {
    match offset {
        AnchorOffset::Px(v) => Length::px(v).to_string(),
        AnchorOffset::Literal(l) => l.to_string(),
    }
}

/// Center the element in the viewport along one axis, or both when `axis`
/// is `None`. Clamps to keep the element's origin on-screen.
pub fn center<M: Metrics>(dom: &mut Node, metrics: &M, id: Id, axis: Option<Axis>) {
    let x = matches!(axis, None | Some(Axis::X)).then_some(HorizontalAnchor::Center);
    let y = matches!(axis, None | Some(Axis::Y)).then_some(VerticalAnchor::Center);
    set(dom, metrics, id, x, y);
}

/// Apply a per-axis placement. A `None` anchor leaves that axis untouched;
/// this never fails and always leaves the element at a valid position.
pub fn set<M: Metrics>(
    dom: &mut Node,
    metrics: &M,
    id: Id,
    x: Option<HorizontalAnchor>,
    y: Option<VerticalAnchor>,
) {
    let left = x.map(|a| offset_css(horizontal_offset(metrics, id, a)));
    let top = y.map(|a| offset_css(vertical_offset(metrics, id, a)));

    let Some(el) = find_node_by_id_mut(dom, id) else {
        return;
    };
    if let Some(v) = top.as_deref() {
        set_style_prop(el, "top", v);
    }
    if let Some(v) = left.as_deref() {
        set_style_prop(el, "left", v);
    }
}
