//! Tween animations for the sheet's two animated properties.
//!
//! A show or hide is one [`Transition`]: an opacity tween on the backdrop and
//! a position tween on the panel's top edge that run in lockstep. The host
//! advances transitions once per frame; completion is reported only after
//! both tweens have reached their end value, which is when the controller
//! runs its completion stage.
//!
//! # Example
//!
//! ```
//! use bottomsheet_ui::animation::{AnimatableProperty, Animation, EasingFunction};
//!
//! let mut fade = Animation::new(AnimatableProperty::Opacity)
//!     .from(0.0)
//!     .to(0.7)
//!     .duration(0.25)
//!     .easing(EasingFunction::EaseIn);
//!
//! while fade.update(1.0 / 60.0) {}
//! assert_eq!(fade.value(), 0.7);
//! ```

use bottomsheet_core::alloc::HashMap;

/// Properties that can be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatableProperty {
    /// Backdrop opacity (0.0 to 1.0)
    Opacity,
    /// Panel top edge, measured from the top of the safe area
    PanelTop,
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in-out
    CubicInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicIn => t * t * t,
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    /// Animation is running
    Running,
    /// Animation is completed
    Completed,
}

/// An animation for a single property.
#[derive(Debug, Clone)]
pub struct Animation {
    /// The property being animated
    property: AnimatableProperty,
    /// Start value
    from: f32,
    /// End value
    to: f32,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    /// Easing function
    easing: EasingFunction,
    /// Animation state
    state: AnimationState,
}

impl Animation {
    /// Create a new animation.
    pub fn new(property: AnimatableProperty) -> Self {
        Self {
            property,
            from: 0.0,
            to: 1.0,
            duration: 1.0,
            elapsed: 0.0,
            easing: EasingFunction::Linear,
            state: AnimationState::Running,
        }
    }

    /// Get the property being animated.
    pub fn property(&self) -> AnimatableProperty {
        self.property
    }

    /// Set the start value.
    pub fn from(mut self, value: f32) -> Self {
        self.from = value;
        self
    }

    /// Set the end value.
    pub fn to(mut self, value: f32) -> Self {
        self.to = value;
        self
    }

    /// Set the duration in seconds. Negative durations are treated as zero.
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Get the end value.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Move the end value without restarting the clock.
    pub fn set_target(&mut self, to: f32) {
        self.to = to;
    }

    /// Normalized progress (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Get the current value.
    pub fn value(&self) -> f32 {
        if self.state == AnimationState::Completed {
            return self.to;
        }
        let eased_t = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased_t
    }

    /// Get the current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Update the animation by delta time.
    ///
    /// Returns true if the animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }

        self.elapsed += delta_time.max(0.0);

        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
            return false;
        }

        true
    }
}

/// Which resting position a transition ends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetPosition {
    /// Panel fully below the safe area, backdrop clear.
    Hidden,
    /// Panel raised to its configured height, backdrop dimmed.
    Shown,
}

/// Backdrop opacity and panel position tweens for one show or hide.
#[derive(Debug, Clone)]
pub struct Transition {
    target: SheetPosition,
    animations: HashMap<AnimatableProperty, Animation>,
}

impl Transition {
    /// Build a transition from the current values towards `target`.
    pub fn new(
        target: SheetPosition,
        from: TransitionValues,
        to: TransitionValues,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        let animations = [
            Animation::new(AnimatableProperty::Opacity)
                .from(from.opacity)
                .to(to.opacity),
            Animation::new(AnimatableProperty::PanelTop)
                .from(from.panel_top)
                .to(to.panel_top),
        ]
        .into_iter()
        .map(|animation| {
            let animation = animation.duration(duration).easing(easing);
            (animation.property(), animation)
        })
        .collect();
        Self { target, animations }
    }

    pub fn target(&self) -> SheetPosition {
        self.target
    }

    /// Current interpolated value of a property.
    pub fn value(&self, property: AnimatableProperty) -> Option<f32> {
        self.animations.get(&property).map(Animation::value)
    }

    /// Current interpolated values of both properties.
    pub fn values(&self) -> TransitionValues {
        TransitionValues {
            opacity: self.value(AnimatableProperty::Opacity).unwrap_or_default(),
            panel_top: self.value(AnimatableProperty::PanelTop).unwrap_or_default(),
        }
    }

    /// Retarget one property without restarting the clock.
    pub fn retarget(&mut self, property: AnimatableProperty, to: f32) {
        if let Some(animation) = self.animations.get_mut(&property) {
            animation.set_target(to);
        }
    }

    /// Advance both tweens.
    ///
    /// Returns true while any tween is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        let mut any_running = false;
        for animation in self.animations.values_mut() {
            any_running |= animation.update(delta_time);
        }
        any_running
    }
}

/// Snapshot of the two animated values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionValues {
    /// Backdrop opacity.
    pub opacity: f32,
    /// Panel top offset from the safe-area top.
    pub panel_top: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_easing() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_starts_slow() {
        let easing = EasingFunction::EaseIn;
        assert_eq!(easing.apply(0.5), 0.25);
        assert!(easing.apply(0.1) < 0.1);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
            EasingFunction::CubicIn,
            EasingFunction::CubicOut,
            EasingFunction::CubicInOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_animation_update() {
        let mut anim = Animation::new(AnimatableProperty::Opacity)
            .from(0.0)
            .to(1.0)
            .duration(1.0);

        assert_eq!(anim.value(), 0.0);

        assert!(anim.update(0.5));
        assert!((anim.value() - 0.5).abs() < 0.01);

        assert!(!anim.update(0.5));
        assert_eq!(anim.value(), 1.0);
        assert_eq!(anim.state(), AnimationState::Completed);
    }

    #[test]
    fn test_zero_duration_completes_on_first_update() {
        let mut anim = Animation::new(AnimatableProperty::PanelTop)
            .from(820.0)
            .to(620.0)
            .duration(0.0);

        assert!(!anim.update(0.0));
        assert_eq!(anim.value(), 620.0);
    }

    #[test]
    fn test_set_target_keeps_progress() {
        let mut anim = Animation::new(AnimatableProperty::PanelTop)
            .from(0.0)
            .to(100.0)
            .duration(1.0);
        anim.update(0.5);
        anim.set_target(200.0);
        assert!((anim.value() - 100.0).abs() < 0.01);
        assert!((anim.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_transition_completes_both_properties() {
        let mut transition = Transition::new(
            SheetPosition::Shown,
            TransitionValues {
                opacity: 0.0,
                panel_top: 820.0,
            },
            TransitionValues {
                opacity: 0.7,
                panel_top: 620.0,
            },
            0.25,
            EasingFunction::EaseIn,
        );

        assert!(transition.update(0.1));
        let mid = transition.values();
        assert!(mid.opacity > 0.0 && mid.opacity < 0.7);
        assert!(mid.panel_top < 820.0 && mid.panel_top > 620.0);

        assert!(!transition.update(0.2));
        assert_eq!(
            transition.values(),
            TransitionValues {
                opacity: 0.7,
                panel_top: 620.0
            }
        );
    }
}
