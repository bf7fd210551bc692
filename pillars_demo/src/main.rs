// Copyright 2026 the Pillars Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowed demo for the pillars chart.
//!
//! Renders the ten-pillar chart with sample scores, rasterizes it on the
//! CPU, and presents it through softbuffer. Hovering a segment scales it
//! and switches the cursor, clicking logs the mapped category.
//!
//! `--png <path>` renders one frame headlessly and exits;
//! `--patterns <dir>` points the pattern cache at an image directory.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use kurbo::{Point, Rect};
use log::{error, info};
use pillars_chart::{
    ChartGeometry, CursorHint, FileImageSource, InteractionController, PatternCache,
    RenderPipeline, ScoreRecord, ScoreSnapshot, SectionRegistry,
};
use pillars_raster::{RasterPainter, initialize_renderer, write_png};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window, WindowId};

const TITLE: &str = "pillars_demo — 10 Pillars";

fn sample_scores() -> ScoreSnapshot {
    ScoreSnapshot::new(vec![
        ScoreRecord::new("Governance", 1.0, "1/10"),
        ScoreRecord::new("Communication", 2.0, "2/10"),
        ScoreRecord::new("Education", 3.0, "3/10"),
        ScoreRecord::new("Assets", 4.0, "4/10"),
        ScoreRecord::new("Structures", 5.0, "5/10"),
        ScoreRecord::new("Advisors", 6.0, "6/10"),
        ScoreRecord::new("Vision", 7.0, "7/10"),
        ScoreRecord::new("Health", 8.0, "8/10"),
        ScoreRecord::new("Sustainable Philanthropy", 9.0, "9/10"),
        ScoreRecord::new("Documentation", 10.0, "10/10"),
    ])
}

struct App {
    window: Option<Arc<Window>>,
    window_id: Option<WindowId>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    registry: SectionRegistry,
    scores: ScoreSnapshot,
    pipeline: RenderPipeline,
    painter: RasterPainter,
    patterns: PatternCache,
    controller: InteractionController,
    geometry: Option<ChartGeometry>,
    cursor: Option<Point>,
}

impl App {
    fn new(pattern_dir: PathBuf) -> Self {
        Self {
            window: None,
            window_id: None,
            surface: None,
            registry: SectionRegistry::ten_pillars(),
            scores: sample_scores(),
            pipeline: RenderPipeline::default(),
            painter: RasterPainter::new(),
            patterns: PatternCache::new(FileImageSource::new(pattern_dir)),
            controller: InteractionController::new(),
            geometry: None,
            cursor: None,
        }
    }

    fn update_window_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        match self.controller.state.selected_category {
            Some(category) => window.set_title(&format!("{TITLE} — category {category}")),
            None => window.set_title(TITLE),
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Geometry for the current window size, for event handling between
    /// frames.
    fn current_geometry(&mut self) -> Option<ChartGeometry> {
        if let Some(geometry) = &self.geometry {
            return Some(geometry.clone());
        }
        let window = self.window.as_ref()?;
        let size = window.inner_size();
        let surface = Rect::new(0.0, 0.0, f64::from(size.width), f64::from(size.height));
        let geometry = pillars_chart::layout(&self.registry, surface);
        self.geometry = Some(geometry.clone());
        Some(geometry)
    }

    fn redraw(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let size = window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };

        let rect = Rect::new(0.0, 0.0, f64::from(size.width), f64::from(size.height));
        let (geometry, mut marks) = self.pipeline.frame(
            &self.registry,
            &self.scores,
            rect,
            &self.controller.state,
            &mut self.patterns,
        );
        self.geometry = Some(geometry);

        let pixmap = match self.painter.paint(&mut marks, size.width, size.height) {
            Ok(pixmap) => pixmap,
            Err(err) => {
                error!("paint failed: {err}");
                return;
            }
        };

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.resize(width, height).expect("resize surface");
        let mut buffer = surface.buffer_mut().expect("acquire buffer");
        for (dst, src) in buffer.iter_mut().zip(pixmap.pixels()) {
            *dst = (u32::from(src.red()) << 16)
                | (u32::from(src.green()) << 8)
                | u32::from(src.blue());
        }
        buffer.present().expect("present buffer");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(TITLE)
                        .with_inner_size(PhysicalSize::new(1000_u32, 1000_u32)),
                )
                .expect("create window"),
        );
        let context = softbuffer::Context::new(window.clone()).expect("softbuffer context");
        let surface =
            softbuffer::Surface::new(&context, window.clone()).expect("softbuffer surface");

        self.window_id = Some(window.id());
        self.window = Some(window);
        self.surface = Some(surface);
        self.request_redraw();
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // One coalesced repaint per batch of finished pattern loads.
        if self.patterns.poll() {
            self.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if Some(id) != self.window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(_) => {
                self.geometry = None;
                self.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Point::new(position.x, position.y);
                self.cursor = Some(pos);
                let Some(geometry) = self.current_geometry() else {
                    return;
                };
                let outcome = self.controller.pointer_moved(pos, &geometry);
                if let Some(window) = &self.window {
                    window.set_cursor(match outcome.cursor {
                        CursorHint::Pointer => CursorIcon::Pointer,
                        CursorHint::Default => CursorIcon::Default,
                    });
                }
                if outcome.redraw {
                    self.request_redraw();
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                if self.controller.pointer_left() {
                    self.request_redraw();
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let Some(pos) = self.cursor else {
                    return;
                };
                let Some(geometry) = self.current_geometry() else {
                    return;
                };
                if let Some(category) = self.controller.pointer_clicked(pos, &geometry) {
                    info!("selected category {category}");
                    self.update_window_title();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

/// Renders one frame without a window and writes it as a PNG.
fn export_png(path: &PathBuf, pattern_dir: PathBuf) -> ExitCode {
    let registry = SectionRegistry::ten_pillars();
    let scores = sample_scores();
    let mut patterns = PatternCache::new(FileImageSource::new(pattern_dir));
    let pipeline = RenderPipeline::default();
    let surface = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let state = pillars_chart::InteractionState::default();

    let (_, mut marks) = pipeline.frame(&registry, &scores, surface, &state, &mut patterns);
    let result = RasterPainter::new()
        .paint(&mut marks, 1000, 1000)
        .and_then(|pixmap| write_png(&pixmap, path));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("png export failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    initialize_renderer();

    let mut png_path: Option<PathBuf> = None;
    let mut pattern_dir = PathBuf::from("patterns");
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--png" => match args.next() {
                Some(path) => png_path = Some(PathBuf::from(path)),
                None => {
                    error!("--png requires a path");
                    return ExitCode::FAILURE;
                }
            },
            "--patterns" => match args.next() {
                Some(dir) => pattern_dir = PathBuf::from(dir),
                None => {
                    error!("--patterns requires a directory");
                    return ExitCode::FAILURE;
                }
            },
            other => {
                error!("unknown argument: {other}");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(path) = png_path {
        return export_png(&path, pattern_dir);
    }

    let event_loop = EventLoop::new().expect("event loop");
    let mut app = App::new(pattern_dir);
    event_loop.run_app(&mut app).expect("run");
    ExitCode::SUCCESS
}
