// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interaction: hit-testing and hover/selection state.
//!
//! The controller is host-agnostic. The windowing layer feeds it pointer
//! positions in surface coordinates and acts on the returned outcome
//! (cursor shape, whether a redraw is needed); it never talks to the
//! renderer directly.

use kurbo::Point;

use crate::geometry::ChartGeometry;
use crate::registry::Ring;

/// A segment identified by ring and position within that ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentRef {
    /// Ring the segment belongs to.
    pub ring: Ring,
    /// Zero-based position within the ring.
    pub index: usize,
}

/// Cursor shape the host should present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorHint {
    /// The arrow cursor; the pointer is not over a segment.
    #[default]
    Default,
    /// The hand cursor; the pointer is over a clickable segment.
    Pointer,
}

/// Mutable interaction state consumed by the render pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    /// Segment currently under the pointer, if any.
    pub hovered: Option<SegmentRef>,
    /// Category index of the last clicked segment.
    pub selected_category: Option<usize>,
    /// Scale factor applied to the hovered segment.
    pub active_scale: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovered: None,
            selected_category: None,
            active_scale: 1.1,
        }
    }
}

/// Result of feeding one pointer move to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerOutcome {
    /// True when the hovered segment changed and a repaint is due.
    pub redraw: bool,
    /// Cursor shape for the new pointer position.
    pub cursor: CursorHint,
}

/// Maps a surface position to the segment under it.
///
/// The position is converted to polar coordinates around the chart center
/// and matched against each segment's angular and radial extent. Segments
/// within a geometry never overlap, so the first match is the only one.
pub fn hit_test(pos: Point, geometry: &ChartGeometry) -> Option<SegmentRef> {
    let v = pos - geometry.center;
    let radius = v.hypot();
    let angle = v.y.atan2(v.x);
    geometry
        .segments
        .iter()
        .find(|arc| arc.contains(angle, radius))
        .map(|arc| SegmentRef {
            ring: arc.ring,
            index: arc.section_index,
        })
}

/// Tracks hover and selection across pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionController {
    /// Current interaction state, read by the render pipeline each frame.
    pub state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates hover state for a pointer move.
    ///
    /// A redraw is requested only when the hovered segment actually
    /// changes, so hosts can forward every motion event without
    /// repainting on each one.
    pub fn pointer_moved(&mut self, pos: Point, geometry: &ChartGeometry) -> PointerOutcome {
        let hit = hit_test(pos, geometry);
        let redraw = hit != self.state.hovered;
        self.state.hovered = hit;
        PointerOutcome {
            redraw,
            cursor: if hit.is_some() {
                CursorHint::Pointer
            } else {
                CursorHint::Default
            },
        }
    }

    /// Clears hover when the pointer leaves the surface.
    ///
    /// Returns true when a repaint is due.
    pub fn pointer_left(&mut self) -> bool {
        let had_hover = self.state.hovered.is_some();
        self.state.hovered = None;
        had_hover
    }

    /// Resolves a click to a category index and records the selection.
    ///
    /// Clicks outside every segment return `None` and leave the previous
    /// selection in place.
    pub fn pointer_clicked(&mut self, pos: Point, geometry: &ChartGeometry) -> Option<usize> {
        let hit = hit_test(pos, geometry)?;
        let category = hit.ring.category_index(hit.index);
        self.state.selected_category = Some(category);
        Some(category)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::geometry::layout;
    use crate::registry::SectionRegistry;

    fn ten_pillar_geometry() -> ChartGeometry {
        layout(
            &SectionRegistry::ten_pillars(),
            Rect::new(0.0, 0.0, 1000.0, 1000.0),
        )
    }

    #[test]
    fn hit_outside_the_chart_misses() {
        let geometry = ten_pillar_geometry();
        assert_eq!(hit_test(Point::new(5.0, 5.0), &geometry), None);
        // Center hole is not clickable.
        assert_eq!(hit_test(geometry.center, &geometry), None);
    }

    #[test]
    fn outer_segment_centroids_hit_their_own_segment() {
        let geometry = ten_pillar_geometry();
        for arc in geometry.segments.clone() {
            let hit = hit_test(arc.centroid(geometry.center), &geometry);
            assert_eq!(
                hit,
                Some(SegmentRef {
                    ring: arc.ring,
                    index: arc.section_index,
                })
            );
        }
    }

    #[test]
    fn clicking_third_outer_segment_selects_category_seven() {
        let geometry = ten_pillar_geometry();
        let mut controller = InteractionController::new();
        let arc = geometry.segment(Ring::Outer, 2).expect("segment exists");
        let category = controller.pointer_clicked(arc.centroid(geometry.center), &geometry);
        assert_eq!(category, Some(7));
        assert_eq!(controller.state.selected_category, Some(7));
    }

    #[test]
    fn clicking_first_inner_segment_selects_category_one() {
        let geometry = ten_pillar_geometry();
        let mut controller = InteractionController::new();
        let arc = geometry.segment(Ring::Inner, 0).expect("segment exists");
        assert_eq!(
            controller.pointer_clicked(arc.centroid(geometry.center), &geometry),
            Some(1)
        );
    }

    #[test]
    fn missed_click_preserves_the_previous_selection() {
        let geometry = ten_pillar_geometry();
        let mut controller = InteractionController::new();
        let arc = geometry.segment(Ring::Outer, 0).expect("segment exists");
        controller.pointer_clicked(arc.centroid(geometry.center), &geometry);
        assert_eq!(
            controller.pointer_clicked(Point::new(1.0, 1.0), &geometry),
            None
        );
        assert_eq!(controller.state.selected_category, Some(5));
    }

    #[test]
    fn hover_redraws_only_on_segment_change() {
        let geometry = ten_pillar_geometry();
        let mut controller = InteractionController::new();
        let arc = geometry.segment(Ring::Outer, 1).expect("segment exists");
        let inside = arc.centroid(geometry.center);

        let entered = controller.pointer_moved(inside, &geometry);
        assert!(entered.redraw);
        assert_eq!(entered.cursor, CursorHint::Pointer);

        // A second move within the same segment is quiet.
        let stayed = controller.pointer_moved(inside, &geometry);
        assert!(!stayed.redraw);
        assert_eq!(stayed.cursor, CursorHint::Pointer);

        let exited = controller.pointer_moved(Point::new(2.0, 2.0), &geometry);
        assert!(exited.redraw);
        assert_eq!(exited.cursor, CursorHint::Default);

        assert!(!controller.pointer_left());
    }

    #[test]
    fn pointer_left_clears_hover() {
        let geometry = ten_pillar_geometry();
        let mut controller = InteractionController::new();
        let arc = geometry.segment(Ring::Inner, 2).expect("segment exists");
        controller.pointer_moved(arc.centroid(geometry.center), &geometry);
        assert!(controller.pointer_left());
        assert_eq!(controller.state.hovered, None);
    }
}
