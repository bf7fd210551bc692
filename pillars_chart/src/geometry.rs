// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc geometry for both rings.
//!
//! Angles are in radians, measured from the positive x axis and increasing
//! clockwise on screen (y-down surface coordinates), starting at 12 o'clock
//! (`-π/2`). Each ring divides the full turn into equal spans, independent
//! of the other ring's section count. The layout pass is pure and
//! deterministic: identical inputs yield bit-identical output, so label
//! placement and hit-testing always agree with the drawn arcs.

use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Point, Rect, Vec2};

use crate::registry::{Ring, SectionRegistry};

/// The 12 o'clock start angle shared by both rings.
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// Angle and radius bounds of one ring segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    /// Ring membership.
    pub ring: Ring,
    /// Position of the section within its ring.
    pub section_index: usize,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Inner radius in surface coordinates.
    pub inner_radius: f64,
    /// Outer radius in surface coordinates.
    pub outer_radius: f64,
}

impl ArcGeometry {
    /// The angular midpoint of the segment.
    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }

    /// The radial midpoint between inner and outer bounds.
    pub fn mid_radius(&self) -> f64 {
        0.5 * (self.inner_radius + self.outer_radius)
    }

    /// The segment centroid (mid-angle at mid-radius) about a chart center.
    pub fn centroid(&self, center: Point) -> Point {
        let angle = self.mid_angle();
        center + Vec2::new(angle.cos(), angle.sin()) * self.mid_radius()
    }

    /// Whether a polar point lies inside this segment.
    ///
    /// The angular test is half-open `[start, end)` so adjacent segments
    /// never both claim a shared edge; the radial test is closed
    /// `[inner, outer]`. `angle` may be any representative of its
    /// equivalence class mod `2π`.
    pub fn contains(&self, angle: f64, radius: f64) -> bool {
        if radius < self.inner_radius || radius > self.outer_radius {
            return false;
        }
        let span = self.end_angle - self.start_angle;
        (angle - self.start_angle).rem_euclid(TAU) < span
    }
}

/// Derived geometry for a whole chart: shared center plus all segments,
/// outer ring first.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Shared center of both rings.
    pub center: Point,
    /// Segment bounds, outer ring sections followed by inner ring sections.
    pub segments: Vec<ArcGeometry>,
}

impl ChartGeometry {
    /// The segments of one ring, in section order.
    pub fn ring(&self, ring: Ring) -> impl Iterator<Item = &ArcGeometry> {
        self.segments.iter().filter(move |s| s.ring == ring)
    }

    /// A single segment by ring and position.
    pub fn segment(&self, ring: Ring, position: usize) -> Option<&ArcGeometry> {
        self.ring(ring).nth(position)
    }
}

/// Computes segment geometry for a registry within a surface rectangle.
///
/// The chart fills the bounding circle of `surface`. The radial span
/// between the center hole and the rim is split between the rings in
/// proportion to their weights, inner ring strictly inside the outer
/// ring's inner radius. Recompute on every resize; this is cheap and
/// keeps no state.
pub fn layout(registry: &SectionRegistry, surface: Rect) -> ChartGeometry {
    let center = surface.center();
    let radius = 0.5 * surface.width().min(surface.height()).max(0.0);
    let hole = registry.hole_fraction().clamp(0.0, 1.0) * radius;
    let span = radius - hole;

    let outer_weight = registry.ring_weight(Ring::Outer).max(0.0);
    let inner_weight = registry.ring_weight(Ring::Inner).max(0.0);
    let total = outer_weight + inner_weight;
    // Nonpositive weights degrade to an equal split rather than a panic.
    let inner_thickness = if total > 0.0 {
        span * inner_weight / total
    } else {
        0.5 * span
    };

    let inner_bounds = (hole, hole + inner_thickness);
    let outer_bounds = (hole + inner_thickness, radius);

    let mut segments = Vec::new();
    for (ring, (r0, r1)) in [(Ring::Outer, outer_bounds), (Ring::Inner, inner_bounds)] {
        let count = registry.sections(ring).len();
        let step = TAU / count as f64;
        for index in 0..count {
            segments.push(ArcGeometry {
                ring,
                section_index: index,
                start_angle: START_ANGLE + index as f64 * step,
                end_angle: START_ANGLE + (index + 1) as f64 * step,
                inner_radius: r0,
                outer_radius: r1,
            });
        }
    }

    ChartGeometry { center, segments }
}
