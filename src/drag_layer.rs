use std::collections::VecDeque;

use egui::Vec2;

mod collaborator;
mod debug;
mod geometry;
mod helper;
mod host;
mod options;
mod position;
mod registry;
mod release;
mod session;
mod target;
mod types;


pub use collaborator::SortableList;
pub use geometry::{
    AxisBounds, TranslateBounds, clamp, clamp_translation, closest_rect, margin_offset,
    translate_bounds, update_distance_between_containers,
};
pub use host::{DragHost, find_scroll_container};
pub use options::{AxisSet, DragLayerOptions, HelperCollision, LockAxis, SortableListOptions};
pub use registry::{ContainerRegistry, Registration};
pub use session::DragSession;
pub use types::{
    ActiveItem, ActiveRecord, Anchor, DragOutcome, DragPhase, FieldKind, FormField, Handoff,
    HelperStyle, ItemKey, ListId, ListenerSurface, Margin, NodeId, PointerEvent, PointerKind,
};

/// Errors from misusing a [`DragLayer`].
///
/// A missing active item is not an error: [`DragLayer::start_drag`] reports it as `Ok(None)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragError {
    AlreadyDragging,
    UnknownList(ListId),
    NotArmed,
    HelperExists,
    MissingGeometry(NodeId),
    HelperCloneFailed(NodeId),
}

impl std::fmt::Display for DragError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDragging => write!(f, "a drag is already in progress"),
            Self::UnknownList(id) => write!(f, "list {id:?} is not registered"),
            Self::NotArmed => write!(f, "no drag session has been started"),
            Self::HelperExists => write!(f, "the drag already has a helper"),
            Self::MissingGeometry(node) => write!(f, "node {node:?} has no bounding rect"),
            Self::HelperCloneFailed(node) => write!(f, "failed to clone node {node:?} as helper"),
        }
    }
}

impl std::error::Error for DragError {}

type DragEndCallback = Box<dyn FnMut(&DragOutcome)>;

/// Tracks one drag gesture at a time across any number of registered sortable lists.
///
/// Flow:
/// - [`Self::start_drag`] on pointer-down over a list item (arms a session, attaches listeners).
/// - [`Self::create_helper`] to clone the item into a floating helper.
/// - [`Self::handle_sort_move`] for every movement event: moves the helper, picks the list
///   closest to the pointer and hands the drag off to it when it changes.
/// - [`Self::handle_sort_end`] on pointer-up, or [`Self::stop_drag`] to cancel.
///
/// Everything runs synchronously inside the host's event callbacks; the host passes itself in
/// as a [`DragHost`] on each call.
pub struct DragLayer<L> {
    pub options: DragLayerOptions,

    registry: ContainerRegistry<L>,
    phase: DragPhase,
    session: Option<DragSession>,
    next_session_id: u64,
    on_drag_end: Option<DragEndCallback>,

    debug_log: VecDeque<String>,
    debug_tick: u64,
}

impl<L: std::fmt::Debug> std::fmt::Debug for DragLayer<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragLayer")
            .field("options", &self.options)
            .field("registry", &self.registry)
            .field("phase", &self.phase)
            .field("session", &self.session)
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish_non_exhaustive()
    }
}

impl<L> Default for DragLayer<L> {
    fn default() -> Self {
        Self::new(DragLayerOptions::default())
    }
}

impl<L> DragLayer<L> {
    pub fn new(options: DragLayerOptions) -> Self {
        Self {
            options,
            registry: ContainerRegistry::default(),
            phase: DragPhase::Idle,
            session: None,
            next_session_id: 1,
            on_drag_end: None,
            debug_log: VecDeque::new(),
            debug_tick: 0,
        }
    }

    /// Register a list when it mounts.
    pub fn register(&mut self, id: ListId, list: L) -> Option<L> {
        log::debug!("register list {id:?}");
        self.registry.register(id, list)
    }

    /// Unregister a list when it unmounts. Safe to call mid-drag.
    pub fn unregister(&mut self, id: ListId) -> Option<L> {
        if self.session.as_ref().is_some_and(|s| s.current_list == id) {
            log::warn!("list {id:?} unregistered while it is the current drop target");
        }
        self.registry.unregister(id)
    }

    pub fn registry(&self) -> &ContainerRegistry<L> {
        &self.registry
    }

    pub fn list(&self, id: ListId) -> Option<&L> {
        self.registry.get(id)
    }

    pub fn list_mut(&mut self, id: ListId) -> Option<&mut L> {
        self.registry.get_mut(id)
    }

    /// Observer called once per drag, when it ends, before the helper is removed.
    pub fn set_on_drag_end(&mut self, callback: impl FnMut(&DragOutcome) + 'static) {
        self.on_drag_end = Some(Box::new(callback));
    }

    pub fn clear_on_drag_end(&mut self) {
        self.on_drag_end = None;
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The list that is currently the drop target.
    pub fn current_list(&self) -> Option<ListId> {
        self.session.as_ref().map(|s| s.current_list)
    }

    pub fn helper(&self) -> Option<NodeId> {
        self.session.as_ref().and_then(DragSession::helper)
    }

    pub fn translation(&self) -> Vec2 {
        self.session
            .as_ref()
            .map_or(Vec2::ZERO, |s| s.translation)
    }

    pub fn distance_between_containers(&self) -> Vec2 {
        self.session
            .as_ref()
            .map_or(Vec2::ZERO, |s| s.distance_between_containers)
    }
}

impl<L: SortableList> DragLayer<L> {
    /// Arm a drag on the active item of `list_id`.
    ///
    /// Returns `Ok(None)` if the list has no active item; the caller must then not create a
    /// helper. Touch drags listen on the dragged node, mouse drags on the window.
    ///
    /// # Errors
    /// [`DragError::AlreadyDragging`] if a drag is in progress, [`DragError::UnknownList`] if
    /// `list_id` isn't registered and [`DragError::MissingGeometry`] if the host can't measure
    /// the active node.
    pub fn start_drag(
        &mut self,
        host: &mut impl DragHost,
        list_id: ListId,
        event: &PointerEvent,
    ) -> Result<Option<ActiveItem>, DragError> {
        if self.session.is_some() {
            return Err(DragError::AlreadyDragging);
        }
        let list = self
            .registry
            .get(list_id)
            .ok_or(DragError::UnknownList(list_id))?;

        let Some(active) = list.active_item() else {
            log::debug!("start_drag on {list_id:?}: no active item");
            return Ok(None);
        };

        let node_rect = host
            .bounding_rect(active.node)
            .ok_or(DragError::MissingGeometry(active.node))?;
        let margin = host.margin(active.node);
        let scroll_container =
            find_scroll_container(&*host, active.node).unwrap_or_else(|| list.container_node());
        let container_rect = list.container_bounds();
        let list_options = list.options().clone();

        let listener = match event.kind {
            PointerKind::Touch => ListenerSurface::Node(active.node),
            PointerKind::Mouse => ListenerSurface::Window,
        };
        host.subscribe(listener);

        let id = self.next_session_id;
        self.next_session_id += 1;
        self.session = Some(DragSession {
            id,
            item: active.key,
            node: active.node,
            source_list: list_id,
            current_list: list_id,
            current_container_rect: container_rect,
            axis: list_options.axis,
            lock_offsets: list.lock_pixel_offsets(),
            list_options,
            initial_offset: event.pos,
            initial_window_scroll: host.window_scroll(),
            node_rect,
            margin,
            margin_offset: margin_offset(&margin),
            container_rect,
            scroll_container,
            edge_offset: Vec2::ZERO,
            listener: Some(listener),
            pointer: event.pos,
            translation: Vec2::ZERO,
            distance_between_containers: Vec2::ZERO,
            helper: None,
            last_pointer_y: None,
            handoffs: 0,
        });
        self.phase = DragPhase::Armed;

        log::debug!(
            "drag {id} armed: item {:?} in {list_id:?}, listening on {listener:?}",
            active.key
        );
        self.debug_log_event(format!(
            "arm id={id} list={list_id:?} item={:?} node={:?}",
            active.key, active.node
        ));

        Ok(Some(active))
    }

    /// Cancel the drag. Same teardown as a pointer-up, without an event.
    pub fn stop_drag(&mut self, host: &mut impl DragHost) {
        self.handle_sort_end(host, None);
    }

    /// Rebase [`Self::distance_between_containers`] on the current list's container origin
    /// relative to the originating container.
    pub fn reset_distance_between_containers(&mut self) {
        let Self {
            session, registry, ..
        } = self;
        let Some(session) = session.as_mut() else {
            return;
        };
        let current = registry
            .get(session.current_list)
            .map_or(session.current_container_rect, |list| list.container_bounds());
        session.distance_between_containers = current.min - session.container_rect.min;
    }
}
