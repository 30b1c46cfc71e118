//! Bottomsheet Core
//!
//! Shared math, geometry, color and diagnostics types used by the
//! bottomsheet widget crates.

pub mod alloc;
pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use color::Color;
