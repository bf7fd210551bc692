// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-ring radial ("pillars") chart engine.
//!
//! This crate is the algorithmic core of the pillars chart:
//! - **Registry** describes the sections of the outer and inner ring.
//! - **Scores** resolve section names to score records and bucket colors.
//! - **Geometry** computes per-segment arc bounds for both rings.
//! - **Labels** place curved text tangentially with a readability flip.
//! - **Patterns** load tiled image fills asynchronously with a fallback.
//! - **Render** assembles a frame as z-ordered marks in a fixed order.
//! - **Interaction** hit-tests pointer events and maps clicks to categories.
//!
//! Painting and windowing are out of scope; the engine emits [`Mark`]s that
//! a painter (e.g. `pillars_raster`) consumes. Data fetch, report export,
//! and navigation are external collaborators specified only at their
//! interfaces.

mod error;
mod geometry;
mod interact;
mod label;
mod mark;
mod pattern;
mod registry;
mod render;
mod score;
mod z_order;

pub use error::{ChartError, PatternError};
pub use geometry::{ArcGeometry, ChartGeometry, START_ANGLE, layout};
pub use interact::{
    CursorHint, InteractionController, InteractionState, PointerOutcome, SegmentRef, hit_test,
};
pub use label::{LabelPlacement, needs_flip, place_label, place_label_offset};
pub use mark::{
    Mark, MarkId, MarkPayload, Paint, PathMark, StrokeStyle, TextAnchor, TextBaseline, TextMark,
    sort_marks,
};
pub use pattern::{
    FileImageSource, ImageSource, PatternCache, PatternHandle, PatternState, fallback_color,
};
pub use registry::{FillKind, Ring, RingLayout, SectionRegistry, SectionSpec};
pub use render::{RenderPipeline, sector_path};
pub use score::{ScoreRecord, ScoreSnapshot, color_for};
pub use z_order::*;
