//! Error types for the bottom sheet.

use std::fmt;

/// Errors that can occur while building or laying out a sheet.
#[derive(Debug)]
pub enum SheetError {
    /// A configuration value is out of range.
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// The layout engine rejected an operation on the sheet's layout graph.
    Layout(taffy::TaffyError),
}

impl SheetError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SheetError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::InvalidConfig { field, reason } => {
                write!(f, "Invalid sheet config `{}`: {}", field, reason)
            }
            SheetError::Layout(err) => write!(f, "Layout error: {}", err),
        }
    }
}

impl std::error::Error for SheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetError::Layout(err) => Some(err),
            SheetError::InvalidConfig { .. } => None,
        }
    }
}

impl From<taffy::TaffyError> for SheetError {
    fn from(err: taffy::TaffyError) -> Self {
        SheetError::Layout(err)
    }
}

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = SheetError::invalid("default_height", "must be finite, got NaN");
        assert_eq!(
            err.to_string(),
            "Invalid sheet config `default_height`: must be finite, got NaN"
        );
        assert!(std::error::Error::source(&err).is_none());
    }
}
