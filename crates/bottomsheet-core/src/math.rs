/// SIMD-accelerated vector math re-exported from [`glam`].
///
/// Screen-space positions and sizes throughout the widget crates use
/// [`Vec2`] in logical units, origin at the top-left of the screen.
///
/// ```
/// use bottomsheet_core::math::Vec2;
///
/// let touch = Vec2::new(120.0, 400.0);
/// let moved = touch + Vec2::new(0.0, 50.0);
/// assert_eq!(moved.y, 450.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::{Vec2, Vec4};
