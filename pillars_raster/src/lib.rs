// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CPU rasterizer for pillars chart marks.
//!
//! Turns the mark lists produced by `pillars_chart` into [`tiny_skia`]
//! pixmaps: solid and tiled path fills, strokes, and text drawn as glyph
//! outlines via [`rusttype`]. Hosts either present the pixmap directly
//! (see `pillars_demo`) or write it out as a PNG.

mod export;
mod font;
mod paint;
mod text;

pub use export::write_png;
pub use font::initialize_renderer;
pub use paint::{RasterError, RasterPainter};
