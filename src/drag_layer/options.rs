/// Which axes an item may be dragged along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AxisSet {
    pub x: bool,
    pub y: bool,
}

impl AxisSet {
    pub const X: Self = Self { x: true, y: false };
    pub const Y: Self = Self { x: false, y: true };
    pub const XY: Self = Self { x: true, y: true };

    /// Parse the `"x"`, `"y"` and `"xy"` shorthand used by list configurations.
    ///
    /// Any string containing the axis letter enables that axis, so `"yx"` works too.
    pub fn parse(axis: &str) -> Self {
        Self {
            x: axis.contains('x'),
            y: axis.contains('y'),
        }
    }
}

impl Default for AxisSet {
    fn default() -> Self {
        Self::Y
    }
}

/// Restrict the helper's visual movement to a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum LockAxis {
    X,
    Y,
}

/// Collide using the helper's edge instead of the raw pointer position.
///
/// When the pointer moves down the helper's bottom edge is tested, otherwise its top edge.
/// `offset` is added to whichever edge is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct HelperCollision {
    pub offset: f32,
}

/// Per-list drag configuration, read by [`super::DragLayer`] from whichever list is current.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortableListOptions {
    /// Axes the items of this list are sorted along.
    pub axis: AxisSet,

    /// If set, the helper only moves along this axis.
    pub lock_axis: Option<LockAxis>,

    /// Keep the helper inside the scroll container while dragging.
    pub lock_to_container_edges: bool,

    /// Use the window instead of the nearest scrolling ancestor to bound helper movement.
    pub use_window_as_scroll_container: bool,

    /// See [`HelperCollision`].
    pub helper_collision: Option<HelperCollision>,
}

/// Options for [`super::DragLayer`] itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragLayerOptions {
    /// If true, record drag events (arm, helper, handoffs, end) in a small ring buffer
    /// readable through [`super::DragLayer::debug_log_text`].
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for DragLayerOptions {
    fn default() -> Self {
        Self {
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}
