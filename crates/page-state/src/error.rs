//! Errors for page state transitions

use page_theme::ThemeId;
use thiserror::Error;

/// State transition errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A theme was selected while the picker list was not showing
    #[error("Theme picker is closed; cannot select {requested}")]
    PickerClosed {
        /// The theme that was requested
        requested: ThemeId,
    },
}

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;
