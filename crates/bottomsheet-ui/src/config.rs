//! Sheet configuration.

use std::time::Duration;

use bottomsheet_core::Color;

use crate::animation::EasingFunction;
use crate::error::{SheetError, SheetResult};
use crate::gesture::SwipeDirection;

/// Resting height of the panel when shown, in logical units.
pub const DEFAULT_SHEET_HEIGHT: f32 = 200.0;
/// Length of both the show and the hide transition.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(250);
/// Backdrop opacity while the sheet is shown.
pub const DEFAULT_DIMMED_OPACITY: f32 = 0.7;
/// Alpha of the backdrop fill, before the animated opacity is applied.
pub const DEFAULT_BACKDROP_FILL_ALPHA: f32 = 0.7;
/// Radius applied to the panel's two top corners.
pub const DEFAULT_CORNER_RADIUS: f32 = 24.0;

/// Configuration for a [`BottomSheetController`](crate::BottomSheetController).
///
/// # Example
///
/// ```
/// use bottomsheet_ui::SheetConfig;
///
/// let config = SheetConfig::default().default_height(320.0).dimmed_opacity(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Resting panel height when shown.
    pub default_height: f32,
    /// Duration of each transition.
    pub animation_duration: Duration,
    /// Easing applied to both opacity and panel position.
    pub easing: EasingFunction,
    /// Backdrop opacity while shown.
    pub dimmed_opacity: f32,
    /// Backdrop fill. Its alpha is multiplied by the animated opacity, so
    /// the default dark gray at 0.7 ends up at 0.49 while shown.
    pub backdrop_color: Color,
    /// Panel fill color.
    pub panel_color: Color,
    /// Top corner radius of the panel.
    pub corner_radius: f32,
    /// Hide when the dimmed area is tapped.
    pub dismiss_on_backdrop_tap: bool,
    /// Swipe directions that hide the sheet.
    pub dismiss_swipe: SwipeDirection,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            default_height: DEFAULT_SHEET_HEIGHT,
            animation_duration: DEFAULT_TRANSITION,
            easing: EasingFunction::EaseIn,
            dimmed_opacity: DEFAULT_DIMMED_OPACITY,
            backdrop_color: Color::DARK_GRAY.with_alpha(DEFAULT_BACKDROP_FILL_ALPHA),
            panel_color: Color::LIGHT_GRAY,
            corner_radius: DEFAULT_CORNER_RADIUS,
            dismiss_on_backdrop_tap: true,
            dismiss_swipe: SwipeDirection::DOWN,
        }
    }
}

impl SheetConfig {
    /// Set the resting panel height.
    pub fn default_height(mut self, height: f32) -> Self {
        self.default_height = height;
        self
    }

    /// Set the transition duration.
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Set the transition easing.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Set the backdrop opacity used while shown.
    pub fn dimmed_opacity(mut self, opacity: f32) -> Self {
        self.dimmed_opacity = opacity;
        self
    }

    /// Set the backdrop color.
    pub fn backdrop_color(mut self, color: Color) -> Self {
        self.backdrop_color = color;
        self
    }

    /// Set the panel color.
    pub fn panel_color(mut self, color: Color) -> Self {
        self.panel_color = color;
        self
    }

    /// Set the panel's top corner radius.
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Enable or disable tap-to-dismiss on the backdrop.
    pub fn dismiss_on_backdrop_tap(mut self, enabled: bool) -> Self {
        self.dismiss_on_backdrop_tap = enabled;
        self
    }

    /// Set the swipe directions that dismiss the sheet.
    pub fn dismiss_swipe(mut self, directions: SwipeDirection) -> Self {
        self.dismiss_swipe = directions;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> SheetResult<()> {
        if !self.default_height.is_finite() || self.default_height < 0.0 {
            return Err(SheetError::invalid(
                "default_height",
                format!("must be finite and non-negative, got {}", self.default_height),
            ));
        }
        if !(0.0..=1.0).contains(&self.dimmed_opacity) {
            return Err(SheetError::invalid(
                "dimmed_opacity",
                format!("must be within [0, 1], got {}", self.dimmed_opacity),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(SheetError::invalid(
                "corner_radius",
                format!("must be finite and non-negative, got {}", self.corner_radius),
            ));
        }
        Ok(())
    }
}
