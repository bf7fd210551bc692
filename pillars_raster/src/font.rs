// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time font discovery.
//!
//! Text rendering needs a TrueType font from the host system. Discovery
//! runs once per process: the `PILLARS_FONT` environment variable is
//! checked first, then a list of common system font paths. When nothing
//! usable is found the painter degrades by skipping text marks, it never
//! fails the frame.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use log::{debug, warn};
use rusttype::Font;

static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Runs font discovery eagerly.
///
/// Optional; the painter discovers the font lazily on first use. Calling
/// this at startup moves the disk probe (and its log output) out of the
/// first frame.
pub fn initialize_renderer() {
    let _ = font();
}

pub(crate) fn font() -> Option<&'static Font<'static>> {
    FONT.get_or_init(|| {
        let found = discover();
        if found.is_none() {
            warn!("no usable font found, text marks will be skipped");
        }
        found
    })
    .as_ref()
}

fn discover() -> Option<Font<'static>> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(path) = env::var("PILLARS_FONT") {
        candidates.push(PathBuf::from(path));
    }
    candidates.extend(SYSTEM_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        let Ok(bytes) = fs::read(&path) else {
            continue;
        };
        match Font::try_from_vec(bytes) {
            Some(font) => {
                debug!("using font {}", path.display());
                return Some(font);
            }
            None => warn!("{} exists but is not a usable font", path.display()),
        }
    }
    None
}
