use super::geometry::clamp_translation;
use super::host::DragHost;
use super::options::LockAxis;
use super::types::PointerEvent;
use super::{DragLayer, SortableList};

impl<L: SortableList> DragLayer<L> {
    /// Recompute the helper translation for this tick and apply it to the helper.
    pub(super) fn update_position(&mut self, host: &mut impl DragHost, event: &PointerEvent) {
        let Self {
            session, registry, ..
        } = self;
        let Some(session) = session.as_mut() else {
            return;
        };

        if let Some(list) = registry.get(session.current_list) {
            session.list_options.clone_from(list.options());
            session.lock_offsets = list.lock_pixel_offsets();
        }

        // Follow the item under the pointer, not a stale viewport frame.
        let scrolled = host.window_scroll() - session.initial_window_scroll;
        let mut translation = event.pos - session.initial_offset - scrolled;
        session.pointer = event.pos;

        if session.list_options.lock_to_container_edges
            && let Some(helper) = session.helper
        {
            translation = clamp_translation(
                translation,
                &helper.bounds,
                helper.size,
                session.lock_offsets,
            );
        }

        match session.list_options.lock_axis {
            Some(LockAxis::X) => translation.y = 0.0,
            Some(LockAxis::Y) => translation.x = 0.0,
            None => {}
        }

        session.translation = translation;
        if let Some(helper) = session.helper {
            host.set_translation(helper.node, translation);
        }
        log::trace!("drag {} translate {translation:?}", session.id);
    }
}
