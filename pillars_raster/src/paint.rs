// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark rasterization.

use kurbo::{BezPath, PathEl};
use pillars_chart::{
    Mark, MarkPayload, Paint, PathMark, PatternHandle, fallback_color, sort_marks,
};
use thiserror::Error;
use tiny_skia::{
    FillRule, FilterQuality, IntSize, PathBuilder, Pattern, Pixmap, Shader, SpreadMode, Stroke,
    Transform,
};

use crate::text;

/// Errors surfaced by the rasterizer.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The requested surface dimensions cannot be allocated.
    #[error("cannot allocate a {width}x{height} surface")]
    SurfaceSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// PNG encoding failed.
    #[error("png encoding failed: {0}")]
    Png(String),
    /// Filesystem error while writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Paints sorted marks onto a [`Pixmap`].
#[derive(Clone, Debug)]
pub struct RasterPainter {
    /// Background fill applied before any mark.
    pub background: peniko::Color,
}

impl Default for RasterPainter {
    fn default() -> Self {
        Self {
            background: peniko::color::palette::css::WHITE,
        }
    }
}

impl RasterPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method for setting the background fill.
    pub fn with_background(mut self, background: peniko::Color) -> Self {
        self.background = background;
        self
    }

    /// Rasterizes marks onto a fresh surface.
    ///
    /// Marks are sorted in place by `(z_index, id)` first, so callers can
    /// pass them in assembly order.
    pub fn paint(
        &self,
        marks: &mut [Mark],
        width: u32,
        height: u32,
    ) -> Result<Pixmap, RasterError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RasterError::SurfaceSize { width, height })?;
        pixmap.fill(to_skia_color(self.background));
        sort_marks(marks);
        for mark in marks.iter() {
            match &mark.payload {
                MarkPayload::Path(path_mark) => draw_path(&mut pixmap, path_mark),
                MarkPayload::Text(text_mark) => text::draw_text(&mut pixmap, text_mark),
            }
        }
        Ok(pixmap)
    }
}

fn draw_path(pixmap: &mut Pixmap, mark: &PathMark) {
    let Some(path) = to_skia_path(&mark.path) else {
        return;
    };

    match &mark.fill {
        Paint::Solid(color) => {
            fill(pixmap, &path, Shader::SolidColor(to_skia_color(*color)));
        }
        Paint::Tiled(handle) => match tile_pixmap(handle) {
            Some(tile) => {
                let shader = Pattern::new(
                    tile.as_ref(),
                    SpreadMode::Repeat,
                    FilterQuality::Bilinear,
                    1.0,
                    Transform::identity(),
                );
                fill(pixmap, &path, shader);
            }
            // Zero-sized handles cannot back a shader; paint flat instead.
            None => fill(
                pixmap,
                &path,
                Shader::SolidColor(to_skia_color(fallback_color())),
            ),
        },
    }

    if let Some(stroke) = &mark.stroke {
        let paint = tiny_skia::Paint {
            shader: Shader::SolidColor(to_skia_color(stroke.color)),
            anti_alias: true,
            ..tiny_skia::Paint::default()
        };
        let stroke = Stroke {
            width: stroke.width as f32,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn fill(pixmap: &mut Pixmap, path: &tiny_skia::Path, shader: Shader<'_>) {
    let paint = tiny_skia::Paint {
        shader,
        anti_alias: true,
        ..tiny_skia::Paint::default()
    };
    pixmap.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
}

pub(crate) fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p.x as f32, p.y as f32);
            }
            PathEl::CurveTo(p1, p2, p) => {
                builder.cubic_to(
                    p1.x as f32,
                    p1.y as f32,
                    p2.x as f32,
                    p2.y as f32,
                    p.x as f32,
                    p.y as f32,
                );
            }
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

pub(crate) fn to_skia_color(color: peniko::Color) -> tiny_skia::Color {
    let rgba = color.to_rgba8();
    tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

// Pattern shaders read premultiplied pixels; handles carry straight alpha.
fn tile_pixmap(handle: &PatternHandle) -> Option<Pixmap> {
    let mut data = handle.pixels().to_vec();
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        px[0] = ((u16::from(px[0]) * a) / 255) as u8;
        px[1] = ((u16::from(px[1]) * a) / 255) as u8;
        px[2] = ((u16::from(px[2]) * a) / 255) as u8;
    }
    let size = IntSize::from_wh(handle.width(), handle.height())?;
    Pixmap::from_vec(data, size)
}
