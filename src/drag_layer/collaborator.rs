use egui::{Rect, Vec2};

use super::options::SortableListOptions;
use super::types::{ActiveItem, ActiveRecord, Anchor, Handoff, NodeId, PointerEvent};

/// What a [`super::DragLayer`] needs from every list it tracks drags for.
///
/// The list owns its items and decides the final order; the drag layer only tells it
/// when a drag enters, moves over and leaves it.
pub trait SortableList {
    /// The draggable item under the pointer, if any.
    fn active_item(&self) -> Option<ActiveItem>;

    /// The node that contains the list's items.
    fn container_node(&self) -> NodeId;

    /// Bounds of [`Self::container_node`] in viewport coordinates.
    fn container_bounds(&self) -> Rect;

    /// The item node closest to the pointer.
    fn closest_anchor(&self, event: &PointerEvent) -> Anchor;

    /// Called right before [`Self::handle_press`] when a drag is handed off to this list.
    fn activate(&mut self, record: ActiveRecord);

    fn handle_press(&mut self, event: &PointerEvent);

    fn handle_sort_move(&mut self, event: &PointerEvent);

    /// The drag ended from this list's point of view.
    ///
    /// `handoff` is set when the drag continues in another list; `event` is `None` for a
    /// programmatic stop.
    fn handle_sort_end(&mut self, event: Option<&PointerEvent>, handoff: Option<Handoff>);

    /// Offset of `node` relative to the list's container edge.
    fn edge_offset(&self, node: NodeId) -> Vec2;

    /// `[min, max]` extra room (in points) allowed past the container edges when
    /// [`SortableListOptions::lock_to_container_edges`] is on.
    fn lock_pixel_offsets(&self) -> [Vec2; 2];

    fn options(&self) -> &SortableListOptions;

    /// Size of the helper for `item`. Defaults to the size of the item's own box.
    fn helper_dimensions(&self, item: &ActiveItem, node_rect: Rect) -> Vec2 {
        let _ = item;
        node_rect.size()
    }

    /// Current scroll offset of the list's own scroll area.
    fn scroll_offset(&self) -> Vec2 {
        Vec2::ZERO
    }
}

impl<L: SortableList + ?Sized> SortableList for Box<L> {
    fn active_item(&self) -> Option<ActiveItem> {
        (**self).active_item()
    }

    fn container_node(&self) -> NodeId {
        (**self).container_node()
    }

    fn container_bounds(&self) -> Rect {
        (**self).container_bounds()
    }

    fn closest_anchor(&self, event: &PointerEvent) -> Anchor {
        (**self).closest_anchor(event)
    }

    fn activate(&mut self, record: ActiveRecord) {
        (**self).activate(record);
    }

    fn handle_press(&mut self, event: &PointerEvent) {
        (**self).handle_press(event);
    }

    fn handle_sort_move(&mut self, event: &PointerEvent) {
        (**self).handle_sort_move(event);
    }

    fn handle_sort_end(&mut self, event: Option<&PointerEvent>, handoff: Option<Handoff>) {
        (**self).handle_sort_end(event, handoff);
    }

    fn edge_offset(&self, node: NodeId) -> Vec2 {
        (**self).edge_offset(node)
    }

    fn lock_pixel_offsets(&self) -> [Vec2; 2] {
        (**self).lock_pixel_offsets()
    }

    fn options(&self) -> &SortableListOptions {
        (**self).options()
    }

    fn helper_dimensions(&self, item: &ActiveItem, node_rect: Rect) -> Vec2 {
        (**self).helper_dimensions(item, node_rect)
    }

    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }
}
