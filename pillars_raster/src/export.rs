// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PNG output.

use std::path::Path;

use log::info;
use tiny_skia::Pixmap;

use crate::paint::RasterError;

/// Writes a rendered surface to a PNG file.
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<(), RasterError> {
    pixmap
        .save_png(path)
        .map_err(|err| RasterError::Png(err.to_string()))?;
    info!(
        "wrote {}x{} png to {}",
        pixmap.width(),
        pixmap.height(),
        path.display()
    );
    Ok(())
}
