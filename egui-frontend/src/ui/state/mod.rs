//! # UI State Modules
//!
//! State structures for the expense tracker, split by concern:
//! - `app_state` - the central application struct the handlers operate on
//! - `form_state` - the create/update dialog draft and its mode machine
//! - `ui_state` - busy flag and error banner

pub mod app_state;
pub mod form_state;
pub mod ui_state;

pub use app_state::ExpenseTrackerApp;
pub use form_state::{DialogMode, ExpenseFormState, ValidationError};
pub use ui_state::UiState;
