//! Bottomsheet UI - modal bottom sheet with a dimmed backdrop
//!
//! This crate provides a render-agnostic bottom sheet controller:
//! - Backdrop and panel laid out by the Taffy layout engine
//! - Eased show/hide transitions stepped by the host's frame loop
//! - Tap-on-backdrop and swipe-down dismissal
//! - Modal teardown and completion callbacks after hiding
//! - A draw list the host renderer can consume directly
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use bottomsheet_ui::{
//!     BottomSheetController, Gesture, Presentation, SheetConfig, SwipeDirection, Viewport,
//! };
//!
//! let mut sheet = BottomSheetController::new(
//!     SheetConfig::default().default_height(240.0),
//!     Viewport::default(),
//!     Presentation::modal(|_animated: bool| { /* pop the modal */ }),
//! )?;
//!
//! sheet.view_did_appear();
//!
//! // In the frame loop:
//! sheet.handle_gesture(&Gesture::Swipe { direction: SwipeDirection::DOWN });
//! sheet.update(Duration::from_millis(16));
//! let _quads = sheet.draw_list();
//! # Ok::<(), bottomsheet_ui::SheetError>(())
//! ```

pub mod animation;
pub mod config;
pub mod draw_list;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod presentation;
pub mod sheet;
pub mod viewport;

pub use animation::{EasingFunction, SheetPosition};
pub use config::SheetConfig;
pub use draw_list::{CornerRadii, DrawList, QuadCommand};
pub use error::{SheetError, SheetResult};
pub use gesture::{Gesture, GestureBatch, GestureBindings, GestureRegion, HandleStatus, SwipeDirection};
pub use layout::{SheetLayout, SheetNode};
pub use presentation::{Presentation, Presenter};
pub use sheet::{BottomSheetController, Completion, SheetState};
pub use viewport::Viewport;

// Re-export common types from dependencies
pub use bottomsheet_core::Color;
pub use bottomsheet_core::geometry::{EdgeInsets, Rect, Size};
pub use bottomsheet_core::math::Vec2;
