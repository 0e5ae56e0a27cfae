use egui::{Pos2, Rect, Vec2};

use super::geometry::{closest_rect, update_distance_between_containers};
use super::host::DragHost;
use super::types::{ActiveRecord, Handoff, ListId, PointerEvent};
use super::{DragLayer, SortableList};

impl<L: SortableList> DragLayer<L> {
    /// Pick the list closest to the collision point and hand the drag off to it if it changed.
    pub(super) fn update_target_container(&mut self, host: &impl DragHost, event: &PointerEvent) {
        let Self {
            session, registry, ..
        } = self;
        let Some(session) = session.as_mut() else {
            return;
        };

        let mut point = event.pos;
        if let Some(collision) = session.list_options.helper_collision
            && let Some(helper_rect) = session.helper.and_then(|h| host.bounding_rect(h.node))
        {
            let moving_down = session.last_pointer_y.is_some_and(|prev| point.y > prev);
            let edge = if moving_down {
                helper_rect.bottom()
            } else {
                helper_rect.top()
            };
            point.y = edge + collision.offset;
        }
        session.last_pointer_y = Some(event.pos.y);

        let snapshot = registry.snapshot();
        let rects: Vec<Rect> = snapshot.iter().map(|&(_, rect)| rect).collect();
        let Some((winner, winner_rect)) = closest_rect(point, &rects).map(|i| snapshot[i]) else {
            log::trace!("drag {}: no registered list to target", session.id);
            return;
        };

        if winner == session.current_list {
            session.current_container_rect = winner_rect;
            return;
        }

        self.handoff(event, winner, winner_rect, point);
    }

    /// Move the drag from the current list to `winner`.
    ///
    /// The outgoing list gets exactly one sort-end and the incoming one exactly one press.
    fn handoff(&mut self, event: &PointerEvent, winner: ListId, winner_rect: Rect, point: Pos2) {
        let Self {
            session, registry, ..
        } = self;
        let Some(session) = session.as_mut() else {
            return;
        };
        let outgoing = session.current_list;

        let helper_size = session
            .helper
            .map_or(session.node_rect.size(), |h| h.size);
        let (source_rect, source_scroll) = registry.get(outgoing).map_or(
            (session.current_container_rect, Vec2::ZERO),
            |list| (list.container_bounds(), list.scroll_offset()),
        );
        let target_scroll = registry
            .get(winner)
            .map_or(Vec2::ZERO, |list| list.scroll_offset());
        session.distance_between_containers = update_distance_between_containers(
            session.distance_between_containers,
            winner_rect,
            source_rect,
            helper_size,
            target_scroll - source_scroll,
        );

        match registry.get_mut(outgoing) {
            Some(list) => list.handle_sort_end(
                Some(event),
                Some(Handoff {
                    target: winner,
                    pointer: point,
                }),
            ),
            None => log::warn!(
                "drag {}: outgoing list {outgoing:?} is no longer registered",
                session.id
            ),
        }

        session.current_list = winner;
        session.current_container_rect = winner_rect;
        session.handoffs += 1;

        if let Some(list) = registry.get_mut(winner) {
            let anchor = list.closest_anchor(event);
            list.activate(ActiveRecord {
                anchor,
                item: session.item,
                distance_between_containers: session.distance_between_containers,
            });
            list.handle_press(event);
            session.list_options.clone_from(list.options());
            session.lock_offsets = list.lock_pixel_offsets();
        }

        let id = session.id;
        let distance = session.distance_between_containers;
        let carried_direction =
            session.list_options.helper_collision.is_some() && session.last_pointer_y.is_some();

        log::debug!("drag {id} handoff {outgoing:?} -> {winner:?}, distance {distance:?}");
        if carried_direction {
            log::debug!(
                "drag {id}: helper-collision direction reference carried over into {winner:?}"
            );
        }
        self.debug_log_event(format!(
            "handoff id={id} from={outgoing:?} to={winner:?} point={point:?} distance={distance:?}"
        ));
    }
}
