// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy.
//!
//! Only configuration-time invariant violations are fatal. Runtime failures
//! (missing data, broken images) are absorbed locally and rendered as a
//! visible degraded state instead.

use thiserror::Error;

use crate::registry::Ring;

/// Configuration-time errors raised while setting up a chart.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// A ring was configured with zero sections. This indicates a registry
    /// bug and fails loudly at setup time rather than at render time.
    #[error("{ring:?} ring has no sections")]
    DegenerateRing {
        /// The offending ring.
        ring: Ring,
    },
}

/// Failures while loading or decoding a pattern image.
///
/// These never escape the pattern cache: the affected entry is marked
/// `Failed` and keeps serving the neutral fallback color.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The image file could not be read.
    #[error("failed to read pattern image: {0}")]
    Io(#[from] std::io::Error),
    /// The image bytes could not be decoded.
    #[error("failed to decode pattern image: {0}")]
    Decode(#[from] image::ImageError),
    /// The decoded image has a zero dimension and cannot tile.
    #[error("pattern image has a zero dimension")]
    EmptyImage,
}
