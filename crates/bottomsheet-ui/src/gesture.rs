//! Gesture input for the sheet.
//!
//! Recognition happens in the host; the sheet only receives gestures that
//! have already been classified as a tap at a point or a swipe in a
//! direction, and decides which of them it is bound to.

use bottomsheet_core::math::Vec2;

bitflags::bitflags! {
    /// Swipe directions, combinable for bindings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SwipeDirection: u8 {
        const RIGHT = 0b0001;
        const LEFT = 0b0010;
        const UP = 0b0100;
        const DOWN = 0b1000;
    }
}

bitflags::bitflags! {
    /// Result of offering a gesture to a handler.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Single tap at a screen position (logical units).
    Tap { position: Vec2 },
    /// Completed swipe. Hosts report exactly one direction per swipe.
    Swipe { direction: SwipeDirection },
}

/// Part of the sheet a gesture handler is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureRegion {
    /// The dimmed area not covered by the panel.
    Backdrop,
    /// The whole sheet view, panel included.
    View,
}

/// Gesture handlers installed on a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureBindings {
    /// Region whose taps hide the sheet, if any.
    pub dismiss_tap: Option<GestureRegion>,
    /// Region and directions whose swipes hide the sheet.
    pub dismiss_swipe: (GestureRegion, SwipeDirection),
}

impl GestureBindings {
    /// Tap on the backdrop and swipe down anywhere on the view.
    pub const fn standard() -> Self {
        Self {
            dismiss_tap: Some(GestureRegion::Backdrop),
            dismiss_swipe: (GestureRegion::View, SwipeDirection::DOWN),
        }
    }

    /// True if `direction` is a single direction contained in the binding.
    pub fn matches_swipe(&self, direction: SwipeDirection) -> bool {
        direction.bits().count_ones() == 1 && self.dismiss_swipe.1.contains(direction)
    }
}

impl Default for GestureBindings {
    fn default() -> Self {
        Self::standard()
    }
}

/// Gestures collected for one frame.
#[derive(Debug, Clone, Default)]
pub struct GestureBatch {
    gestures: Vec<Gesture>,
}

impl GestureBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, gesture: Gesture) {
        self.gestures.push(gesture);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gesture> {
        self.gestures.iter()
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    /// Offer each gesture to `handler`; consumed gestures are removed.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&Gesture) -> HandleStatus,
    {
        self.gestures.retain(|gesture| {
            let status = handler(gesture);
            !status.is_consumed()
        });
    }
}

impl FromIterator<Gesture> for GestureBatch {
    fn from_iter<I: IntoIterator<Item = Gesture>>(iter: I) -> Self {
        Self {
            gestures: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bindings_only_match_down() {
        let bindings = GestureBindings::standard();
        assert!(bindings.matches_swipe(SwipeDirection::DOWN));
        assert!(!bindings.matches_swipe(SwipeDirection::UP));
        assert!(!bindings.matches_swipe(SwipeDirection::LEFT));
        assert!(!bindings.matches_swipe(SwipeDirection::RIGHT));
        assert!(!bindings.matches_swipe(SwipeDirection::DOWN | SwipeDirection::LEFT));
        assert!(!bindings.matches_swipe(SwipeDirection::empty()));
    }

    #[test]
    fn test_dispatch_keeps_unconsumed() {
        let mut batch: GestureBatch = [
            Gesture::Swipe {
                direction: SwipeDirection::DOWN,
            },
            Gesture::Tap {
                position: Vec2::new(10.0, 10.0),
            },
        ]
        .into_iter()
        .collect();

        batch.dispatch(|gesture| match gesture {
            Gesture::Swipe { .. } => HandleStatus::consumed(),
            Gesture::Tap { .. } => HandleStatus::ignored(),
        });

        assert_eq!(batch.len(), 1);
        assert!(matches!(batch.iter().next(), Some(Gesture::Tap { .. })));
    }

    #[test]
    fn test_handle_status_flags() {
        assert!(HandleStatus::consumed().is_handled());
        assert!(HandleStatus::handled().is_handled());
        assert!(!HandleStatus::handled().is_consumed());
        assert!(!HandleStatus::ignored().is_handled());
    }
}
