//! Fixed-step frame loop for tests and benches.

use std::time::Duration;

use bottomsheet_core::profiling;
use bottomsheet_ui::BottomSheetController;

/// Steps a sheet with a constant frame delta.
#[derive(Debug, Clone, Copy)]
pub struct FrameDriver {
    /// Delta passed to every update.
    pub frame: Duration,
    /// Upper bound on frames per `settle` call.
    pub max_frames: usize,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self {
            frame: Duration::from_micros(16_667),
            max_frames: 600,
        }
    }
}

impl FrameDriver {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// Run exactly `frames` updates. Returns whether a transition is still running.
    pub fn run(&self, sheet: &mut BottomSheetController, frames: usize) -> bool {
        let mut running = sheet.is_animating();
        for _ in 0..frames {
            profiling::new_frame();
            running = sheet.update(self.frame);
        }
        running
    }

    /// Update until no transition is running. Returns the number of frames used.
    ///
    /// # Panics
    ///
    /// Panics if the sheet is still animating after `max_frames`.
    pub fn settle(&self, sheet: &mut BottomSheetController) -> usize {
        for frame in 0..self.max_frames {
            profiling::new_frame();
            if !sheet.update(self.frame) {
                return frame + 1;
            }
        }
        panic!(
            "sheet still animating after {} frames of {:?}",
            self.max_frames, self.frame
        );
    }
}
