// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order constants for frame marks.
//!
//! The render pipeline's draw order is a correctness requirement, not a
//! style choice: base segments first (outer ring, then inner), then the
//! active-segment emphasis so it pops above its neighbors, then labels
//! (outer before inner so inner labels are never occluded). Painters
//! should sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Outer-ring base segments.
pub const OUTER_RING: i32 = 0;
/// Inner-ring base segments.
pub const INNER_RING: i32 = 10;
/// The hovered/active segment, redrawn scaled above the base pass.
pub const ACTIVE_SEGMENT: i32 = 20;
/// Outer-ring section labels.
pub const OUTER_LABELS: i32 = 30;
/// Inner-ring section labels.
pub const INNER_LABELS: i32 = 40;
/// Center caption text.
pub const CENTER_TEXT: i32 = 50;
