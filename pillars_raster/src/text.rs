// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text marks drawn as filled glyph outlines.
//!
//! Glyphs are laid out with [`rusttype`], their outlines collected into a
//! [`BezPath`], then anchored, rotated about the anchor point, and filled
//! through the same path rasterization as every other mark. Rotation on
//! the path keeps curved radial labels crisp at any angle.

use kurbo::{Affine, BezPath, Point, Vec2};
use pillars_chart::{TextAnchor, TextBaseline, TextMark};
use rusttype::{Font, OutlineBuilder, Scale, point};
use tiny_skia::{FillRule, Pixmap, Shader, Transform};

use crate::font;
use crate::paint::{to_skia_color, to_skia_path};

pub(crate) fn draw_text(pixmap: &mut Pixmap, mark: &TextMark) {
    let Some(font) = font::font() else {
        return;
    };
    let Some(path) = text_path(font, mark) else {
        return;
    };
    let Some(path) = to_skia_path(&path) else {
        return;
    };
    let paint = tiny_skia::Paint {
        shader: Shader::SolidColor(to_skia_color(mark.fill)),
        anti_alias: true,
        ..tiny_skia::Paint::default()
    };
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

/// Builds the outline of a whole text run, positioned and rotated.
fn text_path(font: &Font<'_>, mark: &TextMark) -> Option<BezPath> {
    let scale = Scale::uniform(mark.font_size as f32);
    let glyphs: Vec<_> = font.layout(&mark.text, scale, point(0.0, 0.0)).collect();

    let width = glyphs.last().map_or(0.0, |glyph| {
        f64::from(glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
    });

    let mut builder = PathCollector::default();
    for glyph in &glyphs {
        glyph.build_outline(&mut builder);
    }
    if builder.path.elements().is_empty() {
        return None;
    }

    let dx = match mark.anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => -width / 2.0,
        TextAnchor::End => -width,
    };
    let metrics = font.v_metrics(scale);
    let dy = match mark.baseline {
        TextBaseline::Alphabetic => 0.0,
        TextBaseline::Middle => f64::from(metrics.ascent + metrics.descent) / 2.0,
        TextBaseline::Hanging => f64::from(metrics.ascent),
    };

    let transform = Affine::translate(mark.pos.to_vec2())
        * Affine::rotate(mark.angle.to_radians())
        * Affine::translate(Vec2::new(dx, dy));
    Some(transform * builder.path)
}

/// Collects glyph outline callbacks into one path.
#[derive(Debug, Default)]
struct PathCollector {
    path: BezPath,
}

impl OutlineBuilder for PathCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(Point::new(f64::from(x), f64::from(y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(Point::new(f64::from(x), f64::from(y)));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.quad_to(
            Point::new(f64::from(x1), f64::from(y1)),
            Point::new(f64::from(x), f64::from(y)),
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.curve_to(
            Point::new(f64::from(x1), f64::from(y1)),
            Point::new(f64::from(x2), f64::from(y2)),
            Point::new(f64::from(x), f64::from(y)),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Shape;
    use peniko::Color;

    use super::*;

    fn sample_mark(anchor: TextAnchor, angle: f64) -> TextMark {
        TextMark {
            pos: Point::new(100.0, 100.0),
            text: "Vision (7/10)".to_owned(),
            font_size: 12.0,
            angle,
            anchor,
            baseline: TextBaseline::Middle,
            fill: Color::BLACK,
        }
    }

    fn test_font() -> Option<&'static Font<'static>> {
        // System dependent; tests that need glyphs bail out when absent.
        font::font()
    }

    #[test]
    fn middle_anchor_centers_the_run_on_the_position() {
        let Some(font) = test_font() else {
            return;
        };
        let path = text_path(font, &sample_mark(TextAnchor::Middle, 0.0)).expect("glyphs exist");
        let bounds = path.bounding_box();
        let center_x = (bounds.min_x() + bounds.max_x()) / 2.0;
        // Glyph side bearings leave a small asymmetry.
        assert!((center_x - 100.0).abs() < 3.0, "center_x = {center_x}");
    }

    #[test]
    fn start_anchor_begins_at_the_position() {
        let Some(font) = test_font() else {
            return;
        };
        let path = text_path(font, &sample_mark(TextAnchor::Start, 0.0)).expect("glyphs exist");
        let bounds = path.bounding_box();
        assert!(bounds.min_x() >= 99.0, "min_x = {}", bounds.min_x());
        assert!(bounds.max_x() > 110.0);
    }

    #[test]
    fn rotation_by_half_turn_mirrors_the_run_about_the_anchor() {
        let Some(font) = test_font() else {
            return;
        };
        let upright =
            text_path(font, &sample_mark(TextAnchor::Start, 0.0)).expect("glyphs exist");
        let flipped =
            text_path(font, &sample_mark(TextAnchor::Start, 180.0)).expect("glyphs exist");
        let up = upright.bounding_box();
        let down = flipped.bounding_box();
        // The run extends right of the anchor when upright, left when flipped.
        assert!(up.max_x() > 100.0 && down.min_x() < 100.0);
        let up_center = (up.min_x() + up.max_x()) / 2.0;
        let down_center = (down.min_x() + down.max_x()) / 2.0;
        assert!((up_center - 100.0 + (down_center - 100.0)).abs() < 1.0);
    }

    #[test]
    fn whitespace_only_runs_produce_no_path() {
        let Some(font) = test_font() else {
            return;
        };
        let mark = TextMark {
            text: "   ".to_owned(),
            ..sample_mark(TextAnchor::Start, 0.0)
        };
        assert!(text_path(font, &mark).is_none());
    }
}
