use egui::{Pos2, Rect, Vec2};

use super::geometry::TranslateBounds;
use super::options::{AxisSet, SortableListOptions};
use super::types::{ItemKey, ListId, ListenerSurface, Margin, NodeId};

#[derive(Clone, Copy, Debug)]
pub(super) struct HelperState {
    pub(super) node: NodeId,
    pub(super) size: Vec2,
    pub(super) bounds: TranslateBounds,
}

/// Everything known about one in-progress drag. Only the drag layer mutates it.
#[derive(Debug)]
pub struct DragSession {
    pub(super) id: u64,
    pub(super) item: ItemKey,
    pub(super) node: NodeId,
    pub(super) source_list: ListId,

    /// Relation only: resolved through the registry on every access.
    pub(super) current_list: ListId,

    /// Last known container bounds of `current_list`, used if it unregisters mid-drag.
    pub(super) current_container_rect: Rect,

    /// Options of `current_list`, refreshed whenever it is reachable.
    pub(super) list_options: SortableListOptions,
    pub(super) lock_offsets: [Vec2; 2],

    pub(super) axis: AxisSet,
    pub(super) initial_offset: Pos2,
    pub(super) initial_window_scroll: Vec2,
    pub(super) node_rect: Rect,
    pub(super) margin: Margin,
    pub(super) margin_offset: Vec2,
    pub(super) container_rect: Rect,
    pub(super) scroll_container: NodeId,
    pub(super) edge_offset: Vec2,
    pub(super) listener: Option<ListenerSurface>,

    pub(super) pointer: Pos2,
    pub(super) translation: Vec2,
    pub(super) distance_between_containers: Vec2,
    pub(super) helper: Option<HelperState>,

    /// Vertical pointer position of the previous tick, for helper-collision direction.
    /// Not reset on handoff.
    pub(super) last_pointer_y: Option<f32>,

    pub(super) handoffs: u32,
}

impl DragSession {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The dragged item's identity. Stable across handoffs.
    pub fn item(&self) -> ItemKey {
        self.item
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn source_list(&self) -> ListId {
        self.source_list
    }

    pub fn current_list(&self) -> ListId {
        self.current_list
    }

    pub fn axis(&self) -> AxisSet {
        self.axis
    }

    pub fn initial_offset(&self) -> Pos2 {
        self.initial_offset
    }

    /// Bounds of the dragged node at drag start.
    pub fn node_rect(&self) -> Rect {
        self.node_rect
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    /// `left + right` and `max(top, bottom)` of the dragged node's margins.
    pub fn margin_offset(&self) -> Vec2 {
        self.margin_offset
    }

    /// Bounds of the originating list's container at drag start.
    pub fn container_rect(&self) -> Rect {
        self.container_rect
    }

    pub fn scroll_container(&self) -> NodeId {
        self.scroll_container
    }

    pub fn edge_offset(&self) -> Vec2 {
        self.edge_offset
    }

    /// Latest pointer position in page coordinates.
    pub fn pointer(&self) -> Pos2 {
        self.pointer
    }

    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn distance_between_containers(&self) -> Vec2 {
        self.distance_between_containers
    }

    pub fn helper(&self) -> Option<NodeId> {
        self.helper.map(|h| h.node)
    }

    pub fn helper_size(&self) -> Option<Vec2> {
        self.helper.map(|h| h.size)
    }

    /// Translation bounds of the helper, once it exists.
    pub fn translate_bounds(&self) -> Option<TranslateBounds> {
        self.helper.map(|h| h.bounds)
    }

    pub fn handoffs(&self) -> u32 {
        self.handoffs
    }
}
