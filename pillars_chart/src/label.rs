// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial label placement.
//!
//! Labels anchor at a segment's mid-angle and mid-radius and rotate
//! tangentially (`angle + π/2`). Naive tangential rotation renders text
//! upside-down on the left half of the circle, so a 180° correction is
//! applied whenever the normalized mid-angle lies strictly between `π/2`
//! and `3π/2`. The boundary angles themselves are not flipped; together
//! with the normalization this keeps the no-flip range exactly
//! `[-π/2, π/2]`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Point, Vec2};

use crate::geometry::ArcGeometry;

/// A resolved label anchor and rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Anchor position in surface coordinates.
    pub pos: Point,
    /// Rotation about the anchor, in radians.
    pub rotation: f64,
}

/// Whether tangential text at `angle` needs the 180° readability flip.
///
/// `angle` uses the chart convention (0 = right, increasing clockwise on
/// screen) and may be any representative mod `2π`.
pub fn needs_flip(angle: f64) -> bool {
    // Normalize into [-π/2, 3π/2) so both boundary angles land on the
    // no-flip side.
    let a = (angle + FRAC_PI_2).rem_euclid(TAU) - FRAC_PI_2;
    a > FRAC_PI_2
}

/// Places a label at a segment's mid-angle and mid-radius.
pub fn place_label(arc: &ArcGeometry, center: Point) -> LabelPlacement {
    place_label_offset(arc, center, 0.0)
}

/// Places a label with an extra outward radial offset.
///
/// The offset is useful for the outermost ring when labels crowd the rim.
pub fn place_label_offset(arc: &ArcGeometry, center: Point, outward: f64) -> LabelPlacement {
    let angle = arc.mid_angle();
    let radius = arc.mid_radius() + outward;
    let pos = center + Vec2::new(angle.cos(), angle.sin()) * radius;
    let mut rotation = angle + FRAC_PI_2;
    if needs_flip(angle) {
        rotation += PI;
    }
    LabelPlacement { pos, rotation }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::START_ANGLE;
    use crate::registry::Ring;

    fn arc(start: f64, end: f64) -> ArcGeometry {
        ArcGeometry {
            ring: Ring::Outer,
            section_index: 0,
            start_angle: start,
            end_angle: end,
            inner_radius: 100.0,
            outer_radius: 200.0,
        }
    }

    #[test]
    fn no_flip_on_the_right_half() {
        assert!(!needs_flip(0.0));
        assert!(!needs_flip(START_ANGLE));
        assert!(!needs_flip(0.3));
        assert!(!needs_flip(-0.3));
    }

    #[test]
    fn flip_on_the_left_half() {
        assert!(needs_flip(PI));
        assert!(needs_flip(FRAC_PI_2 + 0.01));
        assert!(needs_flip(3.0 * FRAC_PI_2 - 0.01));
    }

    #[test]
    fn boundaries_themselves_do_not_flip() {
        assert!(!needs_flip(FRAC_PI_2));
        assert!(!needs_flip(3.0 * FRAC_PI_2));
        // The same boundaries reached from other representatives.
        assert!(!needs_flip(FRAC_PI_2 - TAU));
        assert!(!needs_flip(3.0 * FRAC_PI_2 + TAU));
    }

    #[test]
    fn flip_is_continuous_across_each_boundary_side() {
        // Just inside a boundary behaves like the boundary itself.
        assert_eq!(needs_flip(FRAC_PI_2), needs_flip(FRAC_PI_2 - 1e-9));
        assert_eq!(needs_flip(3.0 * FRAC_PI_2), needs_flip(3.0 * FRAC_PI_2 + 1e-9));
    }

    #[test]
    fn anchor_sits_at_mid_angle_and_mid_radius() {
        // Segment centered on 0 (right side): anchor directly right of center.
        let arc = arc(-0.2, 0.2);
        let center = Point::new(500.0, 500.0);
        let placed = place_label(&arc, center);
        assert!((placed.pos.x - 650.0).abs() < 1e-9);
        assert!((placed.pos.y - 500.0).abs() < 1e-9);
        assert!((placed.rotation - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn left_side_labels_rotate_an_extra_half_turn() {
        // Segment centered on π (left side).
        let arc = arc(PI - 0.2, PI + 0.2);
        let placed = place_label(&arc, Point::ZERO);
        assert!((placed.rotation - (PI + FRAC_PI_2 + PI)).abs() < 1e-9);
    }

    #[test]
    fn outward_offset_moves_along_the_mid_angle() {
        let arc = arc(-0.2, 0.2);
        let center = Point::new(0.0, 0.0);
        let base = place_label(&arc, center);
        let offset = place_label_offset(&arc, center, 25.0);
        assert!((offset.pos.x - (base.pos.x + 25.0)).abs() < 1e-9);
        assert_eq!(offset.rotation, base.rotation);
    }
}
