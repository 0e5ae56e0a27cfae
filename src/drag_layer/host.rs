use egui::{Rect, Vec2};

use super::types::{FieldKind, FormField, HelperStyle, ListenerSurface, Margin, NodeId};

/// The rendering surface a [`super::DragLayer`] draws its helper on and measures nodes with.
///
/// All geometry is in viewport coordinates. Removal calls may be made for nodes that are
/// already gone and must be no-ops in that case.
pub trait DragHost {
    fn bounding_rect(&self, node: NodeId) -> Option<Rect>;

    fn margin(&self, node: NodeId) -> Margin;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Whether the node's style declares an overflow behavior (it clips or scrolls).
    fn declares_overflow(&self, node: NodeId) -> bool;

    fn viewport_size(&self) -> Vec2;

    /// Current window scroll offset.
    fn window_scroll(&self) -> Vec2;

    /// Deep-clone `node` and append the clone to `parent`. Returns the clone.
    fn clone_node(&mut self, node: NodeId, parent: NodeId) -> Option<NodeId>;

    /// Form fields inside `node`, in document order.
    fn form_fields(&self, node: NodeId) -> Vec<FormField>;

    fn set_field_value(&mut self, field: NodeId, value: &str);

    fn apply_helper_style(&mut self, helper: NodeId, style: &HelperStyle);

    fn set_translation(&mut self, helper: NodeId, translation: Vec2);

    fn remove_node(&mut self, node: NodeId);

    /// Start delivering movement and termination events from `surface` to the drag layer.
    fn subscribe(&mut self, surface: ListenerSurface);

    fn unsubscribe(&mut self, surface: ListenerSurface);
}

/// Walk up from `start` (inclusive) to the first node that declares an overflow behavior.
///
/// The root itself is never returned.
pub fn find_scroll_container(host: &impl DragHost, start: NodeId) -> Option<NodeId> {
    let mut node = start;
    while let Some(parent) = host.parent(node) {
        if host.declares_overflow(node) {
            return Some(node);
        }
        node = parent;
    }
    None
}

/// Copy live field values from `source` into the matching fields of its clone.
///
/// Fields are matched by document order. File inputs are skipped.
pub(super) fn copy_field_values(host: &mut impl DragHost, source: NodeId, clone: NodeId) {
    let live = host.form_fields(source);
    let cloned = host.form_fields(clone);
    for (cloned, live) in cloned.iter().zip(&live) {
        if cloned.kind == FieldKind::File {
            continue;
        }
        host.set_field_value(cloned.node, &live.value);
    }
}
