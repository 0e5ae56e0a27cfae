//! Drag tracking for sortable lists: move an item within a list or across lists.
//!
//! [`DragLayer`] owns the gesture for the whole drag. It moves a floating helper with the
//! pointer, picks the list closest to the pointer on every movement tick and hands the drag
//! off between lists. Lists plug in through [`SortableList`], the rendering surface through
//! [`DragHost`].
#![forbid(unsafe_code)]

pub mod drag_layer;

pub use drag_layer::{
    ActiveItem, ActiveRecord, Anchor, AxisSet, ContainerRegistry, DragError, DragHost, DragLayer,
    DragLayerOptions, DragOutcome, DragPhase, DragSession, Handoff, HelperCollision, ItemKey,
    ListId, LockAxis, NodeId, PointerEvent, PointerKind, SortableList, SortableListOptions,
};
