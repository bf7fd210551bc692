// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static section configuration for the two rings.
//!
//! The registry is defined once at startup and never mutated afterwards;
//! section order determines angular position. It also owns the category
//! index mapping, which is part of the public contract toward the
//! navigation collaborator: inner segment *i* maps to category `i + 1`,
//! outer segment *i* to category `i + 5`.

use peniko::Color;

use crate::error::ChartError;

/// Which of the two rings a section belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ring {
    /// The outer ring.
    Outer,
    /// The inner ring.
    Inner,
}

impl Ring {
    /// Maps a segment position in this ring to its logical category index.
    ///
    /// Inner positions `0..=3` map to categories `1..=4`, outer positions
    /// `0..=5` to `5..=10`; together they form a bijection onto `1..=10`
    /// for the default ten-pillar configuration.
    pub fn category_index(self, position: usize) -> usize {
        match self {
            Self::Inner => position + 1,
            Self::Outer => position + 5,
        }
    }
}

/// How a section is filled.
#[derive(Clone, Debug, PartialEq)]
pub enum FillKind {
    /// Flat color derived from the section's current score bucket.
    Score,
    /// Fixed flat color.
    Flat(Color),
    /// Tiled image pattern, loaded by key through the pattern cache.
    Pattern(String),
}

/// A single named section of one ring.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpec {
    /// Section name, matched (normalized) against score records.
    pub name: String,
    /// Ring membership.
    pub ring: Ring,
    /// Fill style.
    pub fill: FillKind,
}

impl SectionSpec {
    /// Creates a section with the default score-bucket fill.
    pub fn new(name: impl Into<String>, ring: Ring) -> Self {
        Self {
            name: name.into(),
            ring,
            fill: FillKind::Score,
        }
    }

    /// Sets the fill style.
    pub fn with_fill(mut self, fill: FillKind) -> Self {
        self.fill = fill;
        self
    }
}

/// Relative radial thickness of one ring.
///
/// Weights need not sum to any fixed total; they split the radial span
/// between hole and rim proportionally.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayout {
    /// The ring this weight applies to.
    pub ring: Ring,
    /// Relative thickness weight.
    pub weight: f64,
}

/// Ordered section lists and ring weights for a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegistry {
    outer: Vec<SectionSpec>,
    inner: Vec<SectionSpec>,
    outer_weight: f64,
    inner_weight: f64,
    hole_fraction: f64,
}

impl SectionRegistry {
    /// Creates a registry from ordered outer/inner section lists.
    ///
    /// A zero-section ring is a configuration bug and fails here rather
    /// than surfacing later as degenerate geometry.
    pub fn new(outer: Vec<SectionSpec>, inner: Vec<SectionSpec>) -> Result<Self, ChartError> {
        if outer.is_empty() {
            return Err(ChartError::DegenerateRing { ring: Ring::Outer });
        }
        if inner.is_empty() {
            return Err(ChartError::DegenerateRing { ring: Ring::Inner });
        }
        Ok(Self {
            outer,
            inner,
            outer_weight: 40.0,
            inner_weight: 30.0,
            hole_fraction: 0.5,
        })
    }

    /// Sets the ring thickness weights.
    pub fn with_ring_weights(mut self, layouts: [RingLayout; 2]) -> Self {
        for layout in layouts {
            match layout.ring {
                Ring::Outer => self.outer_weight = layout.weight,
                Ring::Inner => self.inner_weight = layout.weight,
            }
        }
        self
    }

    /// Sets the center hole radius as a fraction of the chart radius.
    pub fn with_hole_fraction(mut self, fraction: f64) -> Self {
        self.hole_fraction = fraction;
        self
    }

    /// The ten-pillar default: six outer and four inner sections, outer
    /// weight 40, inner weight 30, 50% center hole.
    pub fn ten_pillars() -> Self {
        let outer = [
            "Governance",
            "Structures",
            "Sustainable Philanthropy",
            "Assets",
            "Advisors",
            "Documentation",
        ];
        let inner = ["Vision", "Education", "Health", "Communication"];
        Self {
            outer: outer
                .iter()
                .map(|name| SectionSpec::new(*name, Ring::Outer))
                .collect(),
            inner: inner
                .iter()
                .map(|name| SectionSpec::new(*name, Ring::Inner))
                .collect(),
            outer_weight: 40.0,
            inner_weight: 30.0,
            hole_fraction: 0.5,
        }
    }

    /// The ordered sections of a ring.
    pub fn sections(&self, ring: Ring) -> &[SectionSpec] {
        match ring {
            Ring::Outer => &self.outer,
            Ring::Inner => &self.inner,
        }
    }

    /// A single section by ring and position.
    pub fn section(&self, ring: Ring, position: usize) -> Option<&SectionSpec> {
        self.sections(ring).get(position)
    }

    /// The thickness weight of a ring.
    pub fn ring_weight(&self, ring: Ring) -> f64 {
        match ring {
            Ring::Outer => self.outer_weight,
            Ring::Inner => self.inner_weight,
        }
    }

    /// The center hole radius as a fraction of the chart radius.
    pub fn hole_fraction(&self) -> f64 {
        self.hole_fraction
    }
}
