use egui::{Pos2, Vec2};

/// Identifies a registered sortable list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ListId(pub u64);

/// Opaque handle to a node on the rendering surface (an item, a container, the helper, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct NodeId(pub u64);

/// Identity of a dragged item: the collection it belongs to and its index at drag start.
///
/// This stays the same for the whole drag, even when the item is handed off to another list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ItemKey {
    pub collection: u64,
    pub index: usize,
}

/// The item a list reports as active (the draggable node under the pointer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveItem {
    pub node: NodeId,
    pub key: ItemKey,
}

/// The node a list considers closest to the pointer, used as a local anchor after a handoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub node: NodeId,
    pub index: usize,
}

/// What a list receives when it becomes the drop target mid-drag:
/// its own closest anchor plus the identity of the item that is being dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveRecord {
    pub anchor: Anchor,
    pub item: ItemKey,

    /// Offset between the originating and the new container, already updated for this handoff.
    pub distance_between_containers: Vec2,
}

/// Passed to the outgoing list's sort-end when the drag moves to another list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handoff {
    pub target: ListId,

    /// The point that won the collision test (pointer or helper edge).
    pub pointer: Pos2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// A pointer or touch sample in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: Pos2,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, pos: Pos2) -> Self {
        Self {
            kind,
            pos,
            default_prevented: false,
        }
    }

    pub fn mouse(pos: Pos2) -> Self {
        Self::new(PointerKind::Mouse, pos)
    }

    pub fn touch(pos: Pos2) -> Self {
        Self::new(PointerKind::Touch, pos)
    }

    /// Ask the host not to run its default handling (scroll-on-touch).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Where movement and termination listeners are attached for the duration of a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerSurface {
    /// The whole window (mouse input).
    Window,

    /// The dragged node itself (touch input keeps delivering to the node that started it).
    Node(NodeId),
}

/// Box-model margins of a node, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    pub fn same(margin: f32) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }

    pub fn left_top(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    TextArea,
    Select,

    /// File inputs can't have their value set programmatically.
    File,
}

/// A form field found inside a node, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub node: NodeId,
    pub kind: FieldKind,
    pub value: String,
}

/// Styling applied to a freshly cloned helper.
///
/// The helper is always fixed-positioned, uses border-box sizing and ignores pointer events,
/// so that hit-testing keeps seeing the lists underneath it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelperStyle {
    /// Top-left corner in viewport coordinates (margin-adjusted).
    pub position: Pos2,
    pub size: Vec2,
}

/// Lifecycle of a [`super::DragLayer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,

    /// A session exists and listeners are attached, but no helper yet.
    Armed,

    /// The helper exists and movement ticks are being processed.
    Tracking,

    /// Teardown in progress.
    Terminating,
}

/// Final state of a drag, handed to the drag-ended observer before teardown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOutcome {
    pub session_id: u64,
    pub item: ItemKey,
    pub source_list: ListId,
    pub target_list: ListId,
    pub translation: Vec2,
    pub distance_between_containers: Vec2,
    pub handoffs: u32,
}
