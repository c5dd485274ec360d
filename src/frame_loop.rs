//! Self-rescheduling frame driver with an explicit off switch.
//!
//! The browser calls back once per display frame; the loop decides whether
//! another callback should be requested. Tests drive `tick` directly.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_stopped(&self) -> bool {
        !self.running.get()
    }
}

#[derive(Debug)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
            frames: 0,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: self.running.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Executed frames so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns whether the next frame should be requested.
    pub fn tick(&mut self, frame: impl FnOnce()) -> bool {
        if !self.running.get() {
            return false;
        }
        frame();
        self.frames += 1;
        // The frame itself may have stopped the loop.
        self.running.get()
    }
}
