use egui::{Pos2, Rect};

use super::geometry::translate_bounds;
use super::host::{DragHost, copy_field_values};
use super::session::HelperState;
use super::types::{ActiveItem, DragPhase, HelperStyle, NodeId};
use super::{DragError, DragLayer, SortableList};

impl<L: SortableList> DragLayer<L> {
    /// Clone the dragged node onto `parent` as a fixed-position helper and start tracking.
    ///
    /// Must follow a successful [`Self::start_drag`]; at most one helper exists per drag.
    ///
    /// # Errors
    /// [`DragError::NotArmed`] without a drag, [`DragError::HelperExists`] on a second call,
    /// [`DragError::UnknownList`] if the current list was unregistered and
    /// [`DragError::HelperCloneFailed`] if the host can't clone the node.
    pub fn create_helper(
        &mut self,
        host: &mut impl DragHost,
        parent: NodeId,
    ) -> Result<NodeId, DragError> {
        let Self {
            session, registry, ..
        } = self;
        let Some(session) = session.as_mut() else {
            return Err(DragError::NotArmed);
        };
        if session.helper.is_some() {
            return Err(DragError::HelperExists);
        }
        let list = registry
            .get(session.current_list)
            .ok_or(DragError::UnknownList(session.current_list))?;

        let active = ActiveItem {
            node: session.node,
            key: session.item,
        };
        let size = list.helper_dimensions(&active, session.node_rect);
        session.edge_offset = list.edge_offset(session.node);

        let region = if list.options().use_window_as_scroll_container {
            Rect::from_min_size(Pos2::ZERO, host.viewport_size())
        } else {
            host.bounding_rect(session.scroll_container)
                .unwrap_or(session.container_rect)
        };

        let helper = host
            .clone_node(session.node, parent)
            .ok_or(DragError::HelperCloneFailed(session.node))?;
        copy_field_values(host, session.node, helper);
        host.apply_helper_style(
            helper,
            &HelperStyle {
                position: session.node_rect.min - session.margin.left_top(),
                size,
            },
        );

        let bounds = translate_bounds(region, session.node_rect, size, session.axis);
        session.helper = Some(HelperState {
            node: helper,
            size,
            bounds,
        });
        let id = session.id;

        self.phase = DragPhase::Tracking;
        log::debug!("drag {id} helper {helper:?} created, size {size:?}, bounds {bounds:?}");
        self.debug_log_event(format!("helper id={id} node={helper:?} size={size:?}"));

        Ok(helper)
    }
}
