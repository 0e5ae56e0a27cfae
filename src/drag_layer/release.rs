use super::host::DragHost;
use super::types::{DragOutcome, DragPhase, PointerEvent};
use super::{DragLayer, SortableList};

impl<L: SortableList> DragLayer<L> {
    /// Movement tick: move the helper, retarget, then let the current list update its feedback.
    ///
    /// Ignored when no drag is in progress.
    pub fn handle_sort_move(&mut self, host: &mut impl DragHost, event: &mut PointerEvent) {
        if self.session.is_none() {
            return;
        }
        self.debug_tick += 1;

        // Prevent scrolling on touch devices.
        event.prevent_default();
        let event = *event;

        self.update_position(host, &event);
        self.update_target_container(&*host, &event);

        if let Some(current) = self.current_list()
            && let Some(list) = self.registry.get_mut(current)
        {
            list.handle_sort_move(&event);
        }
    }

    /// Termination: detach listeners, notify the drag-ended observer, remove the helper and
    /// tell the current list the sort ended.
    ///
    /// Idempotent: calling it without a drag in progress does nothing.
    pub fn handle_sort_end(&mut self, host: &mut impl DragHost, event: Option<&PointerEvent>) {
        let Some(mut session) = self.session.take() else {
            self.phase = DragPhase::Idle;
            return;
        };
        self.phase = DragPhase::Terminating;

        if let Some(listener) = session.listener.take() {
            host.unsubscribe(listener);
        }

        let outcome = DragOutcome {
            session_id: session.id,
            item: session.item,
            source_list: session.source_list,
            target_list: session.current_list,
            translation: session.translation,
            distance_between_containers: session.distance_between_containers,
            handoffs: session.handoffs,
        };
        if let Some(on_drag_end) = self.on_drag_end.as_mut() {
            on_drag_end(&outcome);
        }

        if let Some(helper) = session.helper.take() {
            host.remove_node(helper.node);
            match self.registry.get_mut(session.current_list) {
                Some(list) => list.handle_sort_end(event, None),
                None => log::warn!(
                    "drag {}: target list {:?} is gone, final sort-end dropped",
                    session.id,
                    session.current_list
                ),
            }
        }

        self.phase = DragPhase::Idle;
        log::debug!(
            "drag {} ended in {:?} after {} handoff(s)",
            outcome.session_id,
            outcome.target_list,
            outcome.handoffs
        );
        self.debug_log_event(format!(
            "end id={} target={:?} handoffs={} cancelled={}",
            outcome.session_id,
            outcome.target_list,
            outcome.handoffs,
            event.is_none()
        ));
    }
}
