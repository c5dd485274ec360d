//! In-memory stand-ins for the DOM and the drawing surface.
#![allow(dead_code)]

use dirttime_site::background::{FrameUniforms, Surface};
use dirttime_site::render_state::OutputSize;
use dirttime_site::{PageHost, ViewName};

#[derive(Debug, Clone, PartialEq)]
pub struct FakePage {
    pub visible: Vec<ViewName>,
    pub markers: Vec<(String, bool)>,
    pub scroll_resets: usize,
    pub title: String,
    pub fragment: String,
}

impl FakePage {
    /// One marker per view plus one that names no view.
    pub fn new() -> Self {
        let mut markers: Vec<(String, bool)> = ViewName::ALL
            .iter()
            .map(|v| (v.token().to_string(), false))
            .collect();
        markers.push(("download".to_string(), false));
        Self {
            visible: vec![ViewName::Home],
            markers,
            scroll_resets: 0,
            title: String::new(),
            fragment: String::new(),
        }
    }

    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            fragment: fragment.to_string(),
            ..Self::new()
        }
    }

    pub fn current_markers(&self) -> Vec<&str> {
        self.markers
            .iter()
            .filter(|(_, current)| *current)
            .map(|(token, _)| token.as_str())
            .collect()
    }
}

impl PageHost for FakePage {
    fn set_container_visible(&mut self, view: ViewName, visible: bool) {
        self.visible.retain(|v| *v != view);
        if visible {
            self.visible.push(view);
        }
    }

    fn nav_marker_tokens(&self) -> Vec<String> {
        self.markers.iter().map(|(token, _)| token.clone()).collect()
    }

    fn set_nav_marker_current(&mut self, index: usize, current: bool) {
        self.markers[index].1 = current;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_resets += 1;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
    }
}

/// Remembers every resize and frame it was given.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub sizes: Vec<OutputSize>,
    pub frames: Vec<FrameUniforms>,
}

impl Surface for RecordingSurface {
    fn resize(&mut self, size: OutputSize) {
        self.sizes.push(size);
    }

    fn present(&mut self, uniforms: &FrameUniforms) {
        self.frames.push(*uniforms);
    }
}

pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}
