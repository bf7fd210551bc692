// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame mark assembly.
//!
//! The pipeline emits marks in a fixed order each frame: base segments
//! (outer ring, then inner), the hovered segment redrawn scaled about its
//! own centroid, then labels (outer ring first so inner labels are never
//! occluded), then the center caption. The order is encoded both in the
//! emission sequence and in [`crate::z_order`] constants, so painters that
//! sort by `(z_index, id)` reproduce it exactly.

use kurbo::{Affine, BezPath, Circle, Point, Rect, Shape};
use peniko::Color;
use peniko::color::palette::css;

use crate::geometry::{ArcGeometry, ChartGeometry, layout};
use crate::interact::InteractionState;
use crate::label::place_label_offset;
use crate::mark::{
    Mark, MarkId, MarkPayload, Paint, PathMark, StrokeStyle, TextAnchor, TextBaseline, TextMark,
};
use crate::pattern::PatternCache;
use crate::registry::{FillKind, Ring, SectionRegistry, SectionSpec};
use crate::score::{ScoreSnapshot, color_for};
use crate::z_order;

// Mark id blocks per pipeline stage.
const ID_OUTER: u64 = 0x1000;
const ID_INNER: u64 = 0x2000;
const ID_ACTIVE: u64 = 0x3000;
const ID_OUTER_LABEL: u64 = 0x4000;
const ID_INNER_LABEL: u64 = 0x5000;
const ID_CAPTION: u64 = 0x6000;

/// Frame assembly configuration and entry point.
#[derive(Clone, Debug)]
pub struct RenderPipeline {
    /// Section label font size.
    pub label_font_size: f64,
    /// Section label color.
    pub label_color: Color,
    /// Segment border stroke; `None` disables borders.
    pub border: Option<StrokeStyle>,
    /// Extra outward radial offset for outer-ring labels.
    pub outer_label_offset: f64,
    /// Center caption lines, top to bottom.
    pub caption: Vec<String>,
    /// Center caption font size.
    pub caption_font_size: f64,
    /// Curve flattening tolerance for segment paths.
    pub tolerance: f64,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self {
            label_font_size: 12.0,
            label_color: Color::BLACK,
            border: Some(StrokeStyle::solid(css::WHITE, 2.0)),
            outer_label_offset: 0.0,
            caption: ["10 PILLARS", "of", "Generational", "Wealth"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            caption_font_size: 14.0,
            tolerance: 0.1,
        }
    }
}

impl RenderPipeline {
    /// Assembles one frame of marks.
    ///
    /// Geometry is recomputed from the surface rectangle on every call;
    /// the returned [`ChartGeometry`] is the same one used for the drawn
    /// arcs and should be reused for hit-testing until the next frame.
    pub fn frame(
        &self,
        registry: &SectionRegistry,
        scores: &ScoreSnapshot,
        surface: Rect,
        state: &InteractionState,
        patterns: &mut PatternCache,
    ) -> (ChartGeometry, Vec<Mark>) {
        let geometry = layout(registry, surface);
        let mut marks = Vec::new();

        // Base segments, outer ring first.
        for (ring, id_base, z) in [
            (Ring::Outer, ID_OUTER, z_order::OUTER_RING),
            (Ring::Inner, ID_INNER, z_order::INNER_RING),
        ] {
            for arc in geometry.ring(ring) {
                let Some(section) = registry.section(ring, arc.section_index) else {
                    continue;
                };
                marks.push(Mark {
                    id: MarkId(id_base + arc.section_index as u64),
                    z_index: z,
                    payload: MarkPayload::Path(PathMark {
                        path: sector_path(geometry.center, arc, self.tolerance),
                        fill: self.resolve_fill(section, scores, patterns),
                        stroke: self.border,
                    }),
                });
            }
        }

        // Active-segment emphasis above the base pass.
        if let Some(segment) = state.hovered {
            if let Some(arc) = geometry.segment(segment.ring, segment.index) {
                if let Some(section) = registry.section(segment.ring, segment.index) {
                    let centroid = arc.centroid(geometry.center).to_vec2();
                    let emphasis = Affine::translate(centroid)
                        * Affine::scale(state.active_scale)
                        * Affine::translate(-centroid);
                    marks.push(Mark {
                        id: MarkId(ID_ACTIVE),
                        z_index: z_order::ACTIVE_SEGMENT,
                        payload: MarkPayload::Path(PathMark {
                            path: emphasis * sector_path(geometry.center, arc, self.tolerance),
                            fill: self.resolve_fill(section, scores, patterns),
                            stroke: self.border,
                        }),
                    });
                }
            }
        }

        // Labels, outer ring first so inner labels paint on top.
        for (ring, id_base, z, offset) in [
            (
                Ring::Outer,
                ID_OUTER_LABEL,
                z_order::OUTER_LABELS,
                self.outer_label_offset,
            ),
            (Ring::Inner, ID_INNER_LABEL, z_order::INNER_LABELS, 0.0),
        ] {
            for arc in geometry.ring(ring) {
                let Some(section) = registry.section(ring, arc.section_index) else {
                    continue;
                };
                let record = scores.resolve(&section.name);
                let placed = place_label_offset(arc, geometry.center, offset);
                marks.push(Mark {
                    id: MarkId(id_base + arc.section_index as u64),
                    z_index: z,
                    payload: MarkPayload::Text(TextMark {
                        pos: placed.pos,
                        text: format!("{} ({})", section.name, record.label),
                        font_size: self.label_font_size,
                        angle: placed.rotation.to_degrees(),
                        anchor: TextAnchor::Middle,
                        baseline: TextBaseline::Middle,
                        fill: self.label_color,
                    }),
                });
            }
        }

        // Center caption block.
        let line_height = 1.4 * self.caption_font_size;
        let lines = self.caption.len();
        for (index, line) in self.caption.iter().enumerate() {
            let dy = (index as f64 - 0.5 * (lines.saturating_sub(1)) as f64) * line_height;
            marks.push(Mark {
                id: MarkId(ID_CAPTION + index as u64),
                z_index: z_order::CENTER_TEXT,
                payload: MarkPayload::Text(TextMark {
                    pos: Point::new(geometry.center.x, geometry.center.y + dy),
                    text: line.clone(),
                    font_size: self.caption_font_size,
                    angle: 0.0,
                    anchor: TextAnchor::Middle,
                    baseline: TextBaseline::Middle,
                    fill: Color::BLACK,
                }),
            });
        }

        (geometry, marks)
    }

    fn resolve_fill(
        &self,
        section: &SectionSpec,
        scores: &ScoreSnapshot,
        patterns: &mut PatternCache,
    ) -> Paint {
        match &section.fill {
            FillKind::Score => Paint::Solid(color_for(scores.resolve(&section.name).value)),
            FillKind::Flat(color) => Paint::Solid(*color),
            FillKind::Pattern(key) => patterns.fill(key),
        }
    }
}

/// Builds the closed annular sector path for a segment.
pub fn sector_path(center: Point, arc: &ArcGeometry, tolerance: f64) -> BezPath {
    let circle = Circle::new(center, arc.outer_radius);
    let segment = circle.segment(arc.inner_radius, arc.start_angle, arc.end_angle - arc.start_angle);
    segment.path_elements(tolerance).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interact::SegmentRef;
    use crate::pattern::{ImageSource, PatternHandle};
    use crate::score::ScoreRecord;

    struct SolidTileSource;

    impl ImageSource for SolidTileSource {
        fn load(&self, _key: &str) -> Result<PatternHandle, crate::PatternError> {
            Ok(PatternHandle::from_rgba8(2, 2, vec![0x80; 16]).expect("valid tile"))
        }
    }

    fn ten_pillar_frame(
        state: &InteractionState,
    ) -> (ChartGeometry, Vec<Mark>) {
        let registry = SectionRegistry::ten_pillars();
        let scores = ScoreSnapshot::new(vec![ScoreRecord::new("Vision", 7.0, "7/10")]);
        let mut patterns = PatternCache::new(SolidTileSource);
        RenderPipeline::default().frame(
            &registry,
            &scores,
            Rect::new(0.0, 0.0, 1000.0, 1000.0),
            state,
            &mut patterns,
        )
    }

    #[test]
    fn frame_emits_marks_in_nondecreasing_z_order() {
        let (_, marks) = ten_pillar_frame(&InteractionState::default());
        let mut last = i32::MIN;
        for mark in &marks {
            assert!(mark.z_index >= last, "draw order regressed at {:?}", mark.id);
            last = mark.z_index;
        }
    }

    #[test]
    fn frame_without_hover_has_segments_labels_and_caption() {
        let (_, marks) = ten_pillar_frame(&InteractionState::default());
        let paths = marks
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::Path(_)))
            .count();
        let texts = marks
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::Text(_)))
            .count();
        assert_eq!(paths, 10);
        assert_eq!(texts, 10 + 4);
        assert!(!marks.iter().any(|m| m.z_index == z_order::ACTIVE_SEGMENT));
    }

    #[test]
    fn hovered_segment_is_redrawn_scaled_above_the_base_pass() {
        let state = InteractionState {
            hovered: Some(SegmentRef {
                ring: Ring::Outer,
                index: 2,
            }),
            ..InteractionState::default()
        };
        let (_, marks) = ten_pillar_frame(&state);

        let base = marks
            .iter()
            .find(|m| m.id == MarkId(ID_OUTER + 2))
            .expect("base segment mark");
        let active = marks
            .iter()
            .find(|m| m.z_index == z_order::ACTIVE_SEGMENT)
            .expect("emphasis mark");

        let (MarkPayload::Path(base), MarkPayload::Path(active)) =
            (&base.payload, &active.payload)
        else {
            panic!("segment marks must be paths");
        };
        let grown = active.path.bounding_box();
        let original = base.path.bounding_box();
        assert!(grown.width() > original.width());
        assert!(grown.height() > original.height());
    }

    #[test]
    fn labels_carry_resolved_score_labels() {
        let (_, marks) = ten_pillar_frame(&InteractionState::default());
        let texts: Vec<&TextMark> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                MarkPayload::Path(_) => None,
            })
            .collect();
        assert!(texts.iter().any(|t| t.text == "Vision (7/10)"));
        // Sections without provider data fall back to the zero label.
        assert!(texts.iter().any(|t| t.text == "Governance (0/10)"));
    }

    #[test]
    fn pattern_sections_serve_fallback_then_tile() {
        let outer = vec![
            SectionSpec::new("A", Ring::Outer).with_fill(FillKind::Pattern("tile.png".into())),
            SectionSpec::new("B", Ring::Outer),
        ];
        let inner = vec![SectionSpec::new("C", Ring::Inner)];
        let registry = SectionRegistry::new(outer, inner).expect("non-empty rings");
        let scores = ScoreSnapshot::empty();
        let mut patterns = PatternCache::new(SolidTileSource);
        let pipeline = RenderPipeline::default();
        let surface = Rect::new(0.0, 0.0, 400.0, 400.0);
        let state = InteractionState::default();

        let (_, marks) = pipeline.frame(&registry, &scores, surface, &state, &mut patterns);
        let MarkPayload::Path(first) = &marks[0].payload else {
            panic!("expected a path mark");
        };
        assert!(matches!(first.fill, Paint::Solid(_)));

        // Wait for the load, then re-render: the tile must be used.
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while !patterns.poll() {
            assert!(std::time::Instant::now() < deadline, "tile never loaded");
            std::thread::yield_now();
        }
        let (_, marks) = pipeline.frame(&registry, &scores, surface, &state, &mut patterns);
        let MarkPayload::Path(first) = &marks[0].payload else {
            panic!("expected a path mark");
        };
        assert!(matches!(first.fill, Paint::Tiled(_)));
    }

    #[test]
    fn sector_path_has_nonempty_bounds() {
        let arc = ArcGeometry {
            ring: Ring::Outer,
            section_index: 0,
            start_angle: 0.0,
            end_angle: std::f64::consts::FRAC_PI_2,
            inner_radius: 10.0,
            outer_radius: 20.0,
        };
        let path = sector_path(Point::new(50.0, 50.0), &arc, 0.1);
        let bounds = path.bounding_box();
        assert!(bounds.width() > 0.0 && bounds.height() > 0.0);
    }
}
