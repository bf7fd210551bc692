// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render primitives emitted by the pipeline.
//!
//! A frame is a list of [`Mark`]s: filled/stroked paths and unshaped text,
//! each with a stable id and an explicit z-index. Painters consume marks
//! sorted by `(z_index, id)`.

use kurbo::{BezPath, Point};
use peniko::Color;

use crate::pattern::PatternHandle;

/// Stable mark identity, used for deterministic paint-order tie-breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

/// A fill paint: either a flat color or a tiled image pattern.
#[derive(Clone, Debug)]
pub enum Paint {
    /// Flat color fill.
    Solid(Color),
    /// Tiled (repeating) image fill.
    Tiled(PatternHandle),
}

/// An outline stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in surface coordinates.
    pub width: f64,
}

impl StrokeStyle {
    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start of the line.
    #[default]
    Start,
    /// Anchor at the middle of the line.
    Middle,
    /// Anchor at the end of the line.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    #[default]
    Alphabetic,
    /// Vertical midline.
    Middle,
    /// Hanging baseline.
    Hanging,
}

/// A filled (and optionally stroked) path.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path in surface coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Paint,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
}

/// A single line of unshaped text.
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in surface coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in surface coordinates.
    pub font_size: f64,
    /// Rotation about the anchor, in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill color.
    pub fill: Color,
}

/// Mark payload kinds.
#[derive(Clone, Debug)]
pub enum MarkPayload {
    /// A filled/stroked path.
    Path(PathMark),
    /// A text line.
    Text(TextMark),
}

/// A single render mark.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Rendering order hint; see [`crate::z_order`].
    pub z_index: i32,
    /// Payload.
    pub payload: MarkPayload,
}

/// Sorts marks into paint order: ascending `(z_index, id)`.
pub fn sort_marks(marks: &mut [Mark]) {
    marks.sort_by_key(|m| (m.z_index, m.id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_mark(id: u64, z: i32) -> Mark {
        Mark {
            id: MarkId(id),
            z_index: z,
            payload: MarkPayload::Text(TextMark {
                pos: Point::ZERO,
                text: String::new(),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                fill: Color::BLACK,
            }),
        }
    }

    #[test]
    fn sort_orders_by_z_then_id() {
        let mut marks = vec![text_mark(2, 10), text_mark(1, 10), text_mark(9, 0)];
        sort_marks(&mut marks);
        let order: Vec<_> = marks.iter().map(|m| (m.z_index, m.id.0)).collect();
        assert_eq!(order, vec![(0, 9), (10, 1), (10, 2)]);
    }
}
