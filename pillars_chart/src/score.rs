// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Score records and name resolution.
//!
//! The data provider delivers an ordered collection of score records as a
//! full-replacement snapshot. Lookup normalizes names (trim + case-fold)
//! and never fails: an absent section resolves to the zero-value default.

use peniko::Color;
use peniko::color::palette::css;

/// A single section score as delivered by the data provider.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRecord {
    /// Section name.
    pub name: String,
    /// Score value in `0..=10`.
    pub value: f64,
    /// Display label, e.g. `"7/10"`.
    pub label: String,
}

impl ScoreRecord {
    /// Creates a record.
    pub fn new(name: impl Into<String>, value: f64, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            label: label.into(),
        }
    }

    /// The zero-value default used when a section has no data.
    pub fn no_data(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, "0/10")
    }
}

/// The current provider snapshot, replaced wholesale on refresh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreSnapshot {
    records: Vec<ScoreRecord>,
}

impl ScoreSnapshot {
    /// Creates a snapshot from provider records.
    pub fn new(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }

    /// An empty snapshot; every section resolves to the default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolves a section name to its score record.
    ///
    /// Comparison trims whitespace and case-folds both sides. Duplicate
    /// provider records resolve to the first match; a missing name yields
    /// [`ScoreRecord::no_data`].
    pub fn resolve(&self, section_name: &str) -> ScoreRecord {
        let wanted = normalize(section_name);
        self.records
            .iter()
            .find(|record| normalize(&record.name) == wanted)
            .cloned()
            .unwrap_or_else(|| ScoreRecord::no_data(section_name))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Maps a score value to its bucket color.
///
/// Buckets: `[1, 2]` red, `(2, 4]` orange, `(4, 6]` yellow, `(6, 7]` lime,
/// `(7, 10]` green; anything outside `[1, 10]` (including the no-data
/// default of `0`) is gray. Bucket upper edges are inclusive, so the first
/// value past an edge takes the next bucket: `3` orange, `5` yellow,
/// `7` lime, `8` green.
pub fn color_for(value: f64) -> Color {
    if !(1.0..=10.0).contains(&value) {
        return css::GRAY;
    }
    if value <= 2.0 {
        Color::from_rgb8(0xFF, 0x44, 0x44) // red
    } else if value <= 4.0 {
        Color::from_rgb8(0xFF, 0x8C, 0x42) // orange
    } else if value <= 6.0 {
        Color::from_rgb8(0xFF, 0xD7, 0x00) // yellow
    } else if value <= 7.0 {
        Color::from_rgb8(0x9A, 0xCD, 0x32) // lime
    } else {
        Color::from_rgb8(0x4C, 0xAF, 0x50) // green
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ScoreSnapshot {
        ScoreSnapshot::new(vec![
            ScoreRecord::new("Governance", 1.0, "1/10"),
            ScoreRecord::new("Vision", 7.0, "7/10"),
            ScoreRecord::new("vision", 3.0, "3/10"),
            ScoreRecord::new("  Health ", 8.0, "8/10"),
        ])
    }

    #[test]
    fn resolve_normalizes_case_and_whitespace() {
        let scores = snapshot();
        assert_eq!(scores.resolve("  GOVERNANCE ").value, 1.0);
        assert_eq!(scores.resolve("health").value, 8.0);
    }

    #[test]
    fn resolve_prefers_the_first_duplicate() {
        assert_eq!(snapshot().resolve("Vision").value, 7.0);
    }

    #[test]
    fn resolve_defaults_missing_sections_to_zero() {
        let record = snapshot().resolve("Advisors");
        assert_eq!(record.value, 0.0);
        assert_eq!(record.label, "0/10");
        assert_eq!(record.name, "Advisors");
    }

    #[test]
    fn color_buckets_match_documented_thresholds() {
        assert_eq!(color_for(1.0), color_for(2.0));
        assert_eq!(color_for(3.0), color_for(4.0));
        assert_eq!(color_for(5.0), color_for(6.0));
        assert_eq!(color_for(8.0), color_for(10.0));
        assert_ne!(color_for(2.0), color_for(3.0));
        assert_ne!(color_for(6.0), color_for(7.0));
        assert_ne!(color_for(7.0), color_for(8.0));
    }

    #[test]
    fn boundary_values_map_to_the_higher_bucket() {
        // 2/3, 4/5, 6/7 and 7/8 straddle bucket edges; the upper value of
        // each pair lands in the higher bucket.
        assert_eq!(color_for(3.0), Color::from_rgb8(0xFF, 0x8C, 0x42));
        assert_eq!(color_for(5.0), Color::from_rgb8(0xFF, 0xD7, 0x00));
        assert_eq!(color_for(7.0), Color::from_rgb8(0x9A, 0xCD, 0x32));
        assert_eq!(color_for(8.0), Color::from_rgb8(0x4C, 0xAF, 0x50));
    }

    #[test]
    fn out_of_range_values_are_gray() {
        assert_eq!(color_for(0.0), css::GRAY);
        assert_eq!(color_for(10.5), css::GRAY);
        assert_eq!(color_for(f64::NAN), css::GRAY);
    }
}
