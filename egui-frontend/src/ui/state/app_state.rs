//! # Core Application State
//!
//! The essential application state that forms the backbone of the expense
//! tracker app.
//!
//! ## Responsibilities:
//! - Own the repository and the reference-data cache
//! - Hold the current expense snapshot shown in the table
//! - Track the form draft, the pending delete target, and general UI state
//!
//! ## Purpose:
//! This is the single mutable hub the interaction handlers operate on. The
//! expense list is a snapshot refreshed from the store after every
//! successful mutation; handlers never splice records into it locally.

use crate::services::api::ExpenseApi;
use crate::services::expenses::{Expense, ExpenseRepository};
use crate::services::reference_data::ReferenceDataStore;
use crate::ui::state::form_state::{DialogMode, ExpenseFormState};
use crate::ui::state::ui_state::UiState;
use std::sync::Arc;

/// Core application state containing essential app data
pub struct ExpenseTrackerApp {
    /// CRUD access to the expense collection
    pub repository: ExpenseRepository,

    /// Session cache of categories and payment modes
    pub reference_data: ReferenceDataStore,

    /// Snapshot of the expense list, store order preserved
    pub expenses: Vec<Expense>,

    /// Create/update dialog draft and mode
    pub form: ExpenseFormState,

    /// Id awaiting delete confirmation, if the confirm dialog is open
    pub pending_delete: Option<i64>,

    /// Error banner
    pub ui: UiState,

    /// First-frame initialization has run
    pub bootstrapped: bool,
}

impl ExpenseTrackerApp {
    /// Create the app over an API implementation.
    pub fn new(api: Arc<dyn ExpenseApi>) -> Self {
        Self {
            repository: ExpenseRepository::new(api.clone()),
            reference_data: ReferenceDataStore::new(api),
            expenses: Vec::new(),
            form: ExpenseFormState::new(),
            pending_delete: None,
            ui: UiState::new(),
            bootstrapped: false,
        }
    }

    /// A dialog is already on screen.
    ///
    /// The windows are not OS-modal, so the table and toolbar still render
    /// and take clicks underneath them. Background actions check this and
    /// ignore themselves rather than hijack the open dialog.
    pub fn dialog_open(&self) -> bool {
        self.form.mode != DialogMode::Closed || self.pending_delete.is_some()
    }
}
