// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asynchronous tiled-fill cache.
//!
//! `fill(key)` is non-blocking and idempotent: the first call for a key
//! creates a `Pending` entry, hands the key to a worker thread and returns
//! the neutral fallback immediately; later calls keep returning the
//! fallback until [`PatternCache::poll`] observes the completed load. A
//! key is loaded at most once; failures are cached as `Failed` and keep
//! serving the fallback without a retry storm.
//!
//! All cache mutation happens on the render/event thread. The worker only
//! decodes images and reports results over a channel, so no locking is
//! needed beyond the channel itself. Dropping the cache closes the job
//! channel; the worker winds down on its own and late completions are
//! simply never observed.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use log::{debug, warn};
use peniko::Color;

use crate::error::PatternError;
use crate::mark::Paint;

/// Neutral fill served while a pattern is pending or failed.
pub fn fallback_color() -> Color {
    Color::from_rgb8(0xCC, 0xCC, 0xCC)
}

/// A decoded, reusable pattern tile: straight-alpha RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct PatternHandle {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl PatternHandle {
    /// Wraps raw RGBA8 pixels. Returns `None` on a dimension/length
    /// mismatch or a zero dimension.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        if pixels.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// Tile width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tile height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Lifecycle of one cache entry.
#[derive(Clone, Debug)]
pub enum PatternState {
    /// Load issued, result not yet observed.
    Pending,
    /// Decoded and reusable.
    Ready(PatternHandle),
    /// Load failed; the fallback is served permanently.
    Failed,
}

/// The image/pattern source collaborator: resolves a key to a decoded tile.
///
/// Implementations run on the cache's worker thread and may block.
pub trait ImageSource: Send + 'static {
    /// Loads and decodes the image behind `key`.
    fn load(&self, key: &str) -> Result<PatternHandle, PatternError>;
}

/// Loads pattern images from files under a root directory.
///
/// The key is interpreted as a path relative to the root.
#[derive(Clone, Debug)]
pub struct FileImageSource {
    root: PathBuf,
}

impl FileImageSource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageSource for FileImageSource {
    fn load(&self, key: &str) -> Result<PatternHandle, PatternError> {
        let path = self.root.join(key);
        let image = image::ImageReader::open(&path)?.decode()?.to_rgba8();
        let (width, height) = image.dimensions();
        PatternHandle::from_rgba8(width, height, image.into_raw())
            .ok_or(PatternError::EmptyImage)
    }
}

/// Memoizing asynchronous loader for tiled fills.
#[derive(Debug)]
pub struct PatternCache {
    entries: std::collections::HashMap<String, PatternState>,
    job_tx: Sender<String>,
    done_rx: Receiver<(String, Result<PatternHandle, PatternError>)>,
}

impl PatternCache {
    /// Creates a cache backed by the given image source.
    ///
    /// Spawns one worker thread that decodes keys in request order. The
    /// worker exits when the cache is dropped.
    pub fn new(source: impl ImageSource) -> Self {
        let (job_tx, job_rx) = channel::<String>();
        let (done_tx, done_rx) = channel();
        thread::spawn(move || {
            for key in job_rx {
                let result = source.load(&key);
                if done_tx.send((key, result)).is_err() {
                    return;
                }
            }
        });
        Self {
            entries: std::collections::HashMap::new(),
            job_tx,
            done_rx,
        }
    }

    /// Returns the current fill for a key: the ready tile, or the neutral
    /// fallback while the load is pending or after it failed.
    ///
    /// The first call for a key starts its load; re-entrant calls during
    /// the same pass see the `Pending` marker and never enqueue a second
    /// load.
    pub fn fill(&mut self, key: &str) -> Paint {
        match self.entries.get(key) {
            Some(PatternState::Ready(handle)) => Paint::Tiled(handle.clone()),
            Some(PatternState::Pending) | Some(PatternState::Failed) => {
                Paint::Solid(fallback_color())
            }
            None => {
                self.entries
                    .insert(key.to_owned(), PatternState::Pending);
                if self.job_tx.send(key.to_owned()).is_err() {
                    // Worker is gone; nothing will ever complete this key.
                    warn!("pattern worker unavailable; '{key}' marked failed");
                    self.entries.insert(key.to_owned(), PatternState::Failed);
                }
                Paint::Solid(fallback_color())
            }
        }
    }

    /// Drains completed loads. Returns `true` if any entry changed state,
    /// in which case the host should schedule one (coalesced) redraw.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok((key, result)) = self.done_rx.try_recv() {
            match result {
                Ok(handle) => {
                    debug!("pattern '{key}' ready ({}x{})", handle.width(), handle.height());
                    self.entries.insert(key, PatternState::Ready(handle));
                }
                Err(err) => {
                    warn!("pattern '{key}' failed, serving fallback: {err}");
                    self.entries.insert(key, PatternState::Failed);
                }
            }
            changed = true;
        }
        changed
    }

    /// The current state of a key, if it has ever been requested.
    pub fn state(&self, key: &str) -> Option<&PatternState> {
        self.entries.get(key)
    }
}
