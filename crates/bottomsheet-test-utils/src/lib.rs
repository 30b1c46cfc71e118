//! Test utilities for bottomsheet.
//!
//! - [`RecordingPresenter`] - a modal presenter that logs teardown calls
//! - [`EventLog`] - shared, ordered log for presenters and completion callbacks
//! - [`FrameDriver`] - fixed-step frame loop for settling transitions
//!
//! # Example
//!
//! ```rust
//! use bottomsheet_test_utils::{EventLog, FrameDriver, RecordingPresenter};
//! use bottomsheet_ui::{BottomSheetController, SheetConfig, Viewport};
//!
//! let log = EventLog::new();
//! let mut sheet = BottomSheetController::new(
//!     SheetConfig::default(),
//!     Viewport::default(),
//!     RecordingPresenter::new(&log).into_presentation(),
//! )
//! .unwrap();
//!
//! sheet.view_did_appear();
//! FrameDriver::default().settle(&mut sheet);
//!
//! let completion_log = log.clone();
//! sheet.hide_with(move || completion_log.record("complete"));
//! FrameDriver::default().settle(&mut sheet);
//!
//! assert_eq!(log.entries(), vec!["dismiss(animated=false)", "complete"]);
//! ```

pub mod frame_driver;
pub mod recording;

pub use frame_driver::FrameDriver;
pub use recording::{EventLog, RecordingPresenter};
