use egui::{Pos2, Rect, Vec2};
use itertools::Itertools as _;

use super::options::AxisSet;
use super::types::Margin;

/// Two-sided clamp that never panics.
///
/// Unlike [`f32::clamp`], inverted bounds (`min > max`) are allowed: the result collapses to
/// the midpoint of the two bounds. This happens when lock offsets exceed the travel range.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        return (min + max) / 2.0;
    }
    value.max(min).min(max)
}

/// Index of the rectangle closest to `point`.
///
/// A point inside a rectangle has distance zero to it. Ties go to the earliest rectangle.
/// Returns `None` for an empty input.
pub fn closest_rect(point: Pos2, rects: &[Rect]) -> Option<usize> {
    rects
        .iter()
        .map(|rect| rect.distance_sq_to_pos(point))
        .position_min_by(|a, b| a.total_cmp(b))
}

/// Horizontal margins are summed, vertical margins collapse to the larger of the two.
pub fn margin_offset(margin: &Margin) -> Vec2 {
    Vec2::new(margin.left + margin.right, margin.top.max(margin.bottom))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub min: f32,
    pub max: f32,
}

/// How far the helper may be translated on each enabled axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TranslateBounds {
    pub x: Option<AxisBounds>,
    pub y: Option<AxisBounds>,
}

/// Translation bounds for a helper of `helper_size` that starts at `node_rect`,
/// confined to `region` (scroll container or window).
///
/// Both bounds are shifted by half the helper size, so they describe how far the helper's
/// center may travel.
pub fn translate_bounds(
    region: Rect,
    node_rect: Rect,
    helper_size: Vec2,
    axis: AxisSet,
) -> TranslateBounds {
    let half = helper_size / 2.0;
    TranslateBounds {
        x: axis.x.then(|| AxisBounds {
            min: region.left() - node_rect.left() - half.x,
            max: region.right() - node_rect.left() - half.x,
        }),
        y: axis.y.then(|| AxisBounds {
            min: region.top() - node_rect.top() - half.y,
            max: region.bottom() - node_rect.top() - half.y,
        }),
    }
}

/// Clamp `translation` into `bounds`, narrowed by the list's lock offsets.
///
/// With zero lock offsets the helper's edges stop at the region's edges.
pub fn clamp_translation(
    translation: Vec2,
    bounds: &TranslateBounds,
    helper_size: Vec2,
    [min_lock, max_lock]: [Vec2; 2],
) -> Vec2 {
    let half = helper_size / 2.0;
    let min_offset = half - min_lock;
    let max_offset = half - max_lock;

    let mut out = translation;
    if let Some(b) = bounds.x {
        out.x = clamp(out.x, b.min + min_offset.x, b.max - max_offset.x);
    }
    if let Some(b) = bounds.y {
        out.y = clamp(out.y, b.min + min_offset.y, b.max - max_offset.y);
    }
    out
}

/// New inter-container offset after the drag moves from `source` to `target`.
///
/// Each container is anchored at its origin plus half of the helper size (capped by the
/// container's own size), so the helper lands centered the same way in both containers.
/// `scroll_delta` is the target's scroll offset minus the source's.
pub fn update_distance_between_containers(
    previous: Vec2,
    target: Rect,
    source: Rect,
    helper_size: Vec2,
    scroll_delta: Vec2,
) -> Vec2 {
    fn anchor(rect: Rect, helper_size: Vec2) -> Pos2 {
        rect.min + helper_size.min(rect.size()) / 2.0
    }

    previous + (anchor(target, helper_size) - anchor(source, helper_size)) + scroll_delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_min_size(pos2(x, y), vec2(w, h))
    }

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(42.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_with_inverted_bounds_collapses_to_midpoint() {
        assert_eq!(clamp(5.0, 10.0, 2.0), 6.0);
        assert_eq!(clamp(-100.0, 10.0, 2.0), 6.0);
    }

    #[test]
    fn closest_rect_picks_containing_rect() {
        let rects = [rect(0.0, 0.0, 100.0, 300.0), rect(120.0, 0.0, 100.0, 300.0)];
        assert_eq!(closest_rect(pos2(150.0, 40.0), &rects), Some(1));
        assert_eq!(closest_rect(pos2(10.0, 40.0), &rects), Some(0));
    }

    #[test]
    fn closest_rect_picks_nearest_when_outside_all() {
        let rects = [rect(0.0, 0.0, 100.0, 100.0), rect(300.0, 0.0, 100.0, 100.0)];
        assert_eq!(closest_rect(pos2(250.0, 50.0), &rects), Some(1));
        assert_eq!(closest_rect(pos2(140.0, 500.0), &rects), Some(0));
    }

    #[test]
    fn closest_rect_ties_go_to_first() {
        let rects = [rect(0.0, 0.0, 100.0, 100.0), rect(200.0, 0.0, 100.0, 100.0)];
        // Exactly between both.
        assert_eq!(closest_rect(pos2(150.0, 50.0), &rects), Some(0));

        // Overlapping containers both contain the point.
        let nested = [rect(0.0, 0.0, 500.0, 500.0), rect(10.0, 10.0, 50.0, 50.0)];
        for _ in 0..3 {
            assert_eq!(closest_rect(pos2(20.0, 20.0), &nested), Some(0));
        }
    }

    #[test]
    fn closest_rect_of_nothing_is_none() {
        assert_eq!(closest_rect(pos2(0.0, 0.0), &[]), None);
    }

    #[test]
    fn vertical_margins_collapse() {
        let margin = Margin {
            top: 4.0,
            right: 3.0,
            bottom: 10.0,
            left: 2.0,
        };
        assert_eq!(margin_offset(&margin), vec2(5.0, 10.0));
    }

    #[test]
    fn bounds_only_for_enabled_axes() {
        let region = rect(0.0, 0.0, 200.0, 400.0);
        let node = rect(0.0, 100.0, 200.0, 50.0);
        let bounds = translate_bounds(region, node, vec2(200.0, 50.0), AxisSet::Y);
        assert!(bounds.x.is_none());
        assert_eq!(
            bounds.y,
            Some(AxisBounds {
                min: -125.0,
                max: 275.0
            })
        );
    }

    #[test]
    fn clamped_translation_keeps_helper_inside_region() {
        let region = rect(0.0, 0.0, 200.0, 400.0);
        let node = rect(0.0, 100.0, 200.0, 50.0);
        let size = vec2(200.0, 50.0);
        let bounds = translate_bounds(region, node, size, AxisSet::Y);

        let up = clamp_translation(vec2(0.0, -500.0), &bounds, size, [Vec2::ZERO; 2]);
        assert_eq!(up.y, -100.0, "helper top stops at region top");

        let down = clamp_translation(vec2(0.0, 500.0), &bounds, size, [Vec2::ZERO; 2]);
        assert_eq!(down.y, 250.0, "helper bottom stops at region bottom");
    }

    #[test]
    fn handoff_distance_between_equal_columns() {
        let a = rect(0.0, 0.0, 100.0, 300.0);
        let b = rect(120.0, 0.0, 100.0, 300.0);
        let d = update_distance_between_containers(Vec2::ZERO, b, a, vec2(100.0, 40.0), Vec2::ZERO);
        assert_eq!(d, vec2(120.0, 0.0));

        // And back again.
        let back = update_distance_between_containers(d, a, b, vec2(100.0, 40.0), Vec2::ZERO);
        assert_eq!(back, Vec2::ZERO);
    }

    #[test]
    fn handoff_distance_recenters_in_narrow_target() {
        let wide = rect(0.0, 0.0, 200.0, 300.0);
        let narrow = rect(300.0, 0.0, 60.0, 300.0);
        let d = update_distance_between_containers(
            Vec2::ZERO,
            narrow,
            wide,
            vec2(100.0, 40.0),
            vec2(0.0, 15.0),
        );
        // 300 + 30 - 50 on x, scroll delta on y.
        assert_eq!(d, vec2(280.0, 15.0));
    }
}
