//! Time, pointer and size state read by every background frame.

use glam::Vec2;

use crate::config::{MAX_PIXEL_RATIO, POINTER_DAMPING};

/// Browser viewport as reported by `window`: CSS pixels plus the device ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Size in CSS pixels, never below 1x1.
    pub fn css_size(&self) -> OutputSize {
        OutputSize::from_f64(self.width, self.height)
    }

    /// Drawing-buffer size. The ratio is capped so high-density screens do not
    /// multiply the per-pixel cost without bound.
    pub fn surface_size(&self) -> OutputSize {
        let ratio = self.pixel_ratio();
        OutputSize::from_f64(self.width * ratio, self.height * ratio)
    }

    pub fn pixel_ratio(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl OutputSize {
    fn from_f64(width: f64, height: f64) -> Self {
        let clamp = |v: f64| {
            if v.is_finite() {
                v.floor().clamp(1.0, u32::MAX as f64) as u32
            } else {
                1
            }
        };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    elapsed: f32,
    pointer: Vec2,
    smoothed_pointer: Vec2,
    output_size: OutputSize,
    surface_size: OutputSize,
}

impl RenderState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            elapsed: 0.0,
            pointer: Vec2::splat(0.5),
            smoothed_pointer: Vec2::splat(0.5),
            output_size: viewport.css_size(),
            surface_size: viewport.surface_size(),
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn smoothed_pointer(&self) -> Vec2 {
        self.smoothed_pointer
    }

    pub fn output_size(&self) -> OutputSize {
        self.output_size
    }

    pub fn surface_size(&self) -> OutputSize {
        self.surface_size
    }

    /// Per-frame step. Takes the clock reading in seconds and moves the
    /// smoothed pointer 5% of the way to the raw pointer. The damping is per
    /// frame, so faster displays converge faster.
    pub fn advance(&mut self, clock_seconds: f64) {
        let now = clock_seconds as f32;
        if now.is_finite() && now > self.elapsed {
            self.elapsed = now;
        }
        self.smoothed_pointer += (self.pointer - self.smoothed_pointer) * POINTER_DAMPING;
    }

    /// Pointer position in client pixels. Stored normalised with y up.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, viewport: &Viewport) {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        let x = (client_x / viewport.width).clamp(0.0, 1.0);
        let y = 1.0 - (client_y / viewport.height).clamp(0.0, 1.0);
        self.pointer = Vec2::new(x as f32, y as f32);
    }

    /// Record a new viewport. Returns the drawing-buffer size to apply.
    pub fn resized(&mut self, viewport: &Viewport) -> OutputSize {
        self.output_size = viewport.css_size();
        self.surface_size = viewport.surface_size();
        self.surface_size
    }
}
