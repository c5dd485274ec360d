//! Background renderer host: owns the render state and feeds a surface.

use glam::Vec2;

use crate::frame_loop::{FrameLoop, StopHandle};
use crate::pattern;
use crate::render_state::{OutputSize, RenderState, Viewport};

/// Per-frame inputs handed to the pattern program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// Seconds since page start.
    pub time: f32,
    /// Viewport size in CSS pixels.
    pub resolution: Vec2,
    /// Smoothed pointer, normalised with y up.
    pub pointer: Vec2,
}

/// Something the pattern can be drawn onto.
pub trait Surface {
    /// Set the drawing-buffer size in device pixels.
    fn resize(&mut self, size: OutputSize);

    fn present(&mut self, uniforms: &FrameUniforms);
}

pub struct BackgroundRenderer<S: Surface> {
    state: RenderState,
    frames: FrameLoop,
    surface: S,
}

impl<S: Surface> BackgroundRenderer<S> {
    pub fn new(mut surface: S, viewport: Viewport) -> Self {
        let state = RenderState::new(viewport);
        surface.resize(state.surface_size());
        log::debug!(
            "background surface {}x{} (css {}x{})",
            state.surface_size().width,
            state.surface_size().height,
            state.output_size().width,
            state.output_size().height
        );
        Self {
            state,
            frames: FrameLoop::new(),
            surface,
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.frames.stop_handle()
    }

    pub fn frames(&self) -> u64 {
        self.frames.frames()
    }

    /// One display frame. Returns whether another frame should be requested.
    pub fn frame(&mut self, clock_seconds: f64) -> bool {
        let state = &mut self.state;
        let surface = &mut self.surface;
        self.frames.tick(|| {
            state.advance(clock_seconds);
            surface.present(&FrameUniforms {
                time: state.elapsed(),
                resolution: state.output_size().as_vec2(),
                pointer: state.smoothed_pointer(),
            });
        })
    }

    /// Only the raw pointer moves here; the smoothed one catches up per frame.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, viewport: &Viewport) {
        self.state.pointer_moved(client_x, client_y, viewport);
    }

    pub fn on_resize(&mut self, viewport: &Viewport) {
        let size = self.state.resized(viewport);
        log::debug!("background resize {}x{}", size.width, size.height);
        self.surface.resize(size);
    }
}

/// CPU rasteriser: evaluates the pattern for every pixel into RGBA8, rows top
/// to bottom. Clamping happens here, not in the pattern.
#[derive(Debug, Clone, Default)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of the pixel at column `x`, row `y` counted from the top.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(rgba)
    }
}

impl Surface for PixelSurface {
    fn resize(&mut self, size: OutputSize) {
        self.width = size.width;
        self.height = size.height;
        self.pixels = vec![0; size.width as usize * size.height as usize * 4];
    }

    fn present(&mut self, uniforms: &FrameUniforms) {
        let aspect = uniforms.resolution.x / uniforms.resolution.y;
        let (w, h) = (self.width as f32, self.height as f32);
        for row in 0..self.height {
            // Fragment coordinates count from the bottom-left pixel centre.
            let frag_y = (self.height - 1 - row) as f32 + 0.5;
            for col in 0..self.width {
                let frag = Vec2::new(col as f32 + 0.5, frag_y);
                let color =
                    pattern::evaluate(frag.x / w, frag.y / h, uniforms.time, aspect, frag);
                let offset = ((row * self.width + col) * 4) as usize;
                self.pixels[offset..offset + 4].copy_from_slice(&color.to_rgba8());
            }
        }
    }
}
