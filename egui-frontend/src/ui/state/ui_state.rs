//! # UI State Module
//!
//! General UI state that affects the overall user experience but is not
//! specific to any particular component.
//!
//! ## Responsibilities:
//! - User feedback messages (error banner)
//!
//! ## Purpose:
//! This separates general UI concerns from the form draft and the expense
//! list, so user feedback is managed in one place.

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UiState {
    /// Error message shown in the banner above the table
    pub error_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            error_message: None,
        }
    }

    /// Clear any error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }
}
