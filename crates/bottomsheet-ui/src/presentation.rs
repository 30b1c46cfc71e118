//! How a sheet is attached to the host's view hierarchy.

use std::fmt;

/// Owner of a modal presentation, able to tear it down.
pub trait Presenter {
    /// Remove the presented sheet from the host's hierarchy.
    fn dismiss(&mut self, animated: bool);
}

impl<F> Presenter for F
where
    F: FnMut(bool),
{
    fn dismiss(&mut self, animated: bool) {
        self(animated)
    }
}

/// Presentation mode of a sheet.
pub enum Presentation {
    /// Presented modally; hiding tears the presentation down.
    Modal(Box<dyn Presenter>),
    /// Embedded in a parent view; hiding leaves the hierarchy untouched.
    Embedded,
}

impl Presentation {
    /// Modal presentation owned by `presenter`.
    pub fn modal(presenter: impl Presenter + 'static) -> Self {
        Presentation::Modal(Box::new(presenter))
    }

    pub fn is_modal(&self) -> bool {
        matches!(self, Presentation::Modal(_))
    }
}

impl fmt::Debug for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presentation::Modal(_) => f.write_str("Modal"),
            Presentation::Embedded => f.write_str("Embedded"),
        }
    }
}
