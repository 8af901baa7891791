//! # Data Loading Module
//!
//! This module handles the data loading operations for the expense tracker
//! app, fetching application state from the backing store.
//!
//! ## Key Functions:
//! - `load_initial_data()` - Load reference data and the expense list on startup
//! - `refresh_expenses()` - Re-fetch the expense list snapshot
//! - `retry_reference_data()` - Retry datasets whose initial load failed
//!
//! ## Purpose:
//! Centralizes the loading logic so error handling and state updates stay
//! consistent. The expense list is always replaced wholesale with whatever
//! the store returns; nothing here edits it in place.

use crate::ui::state::app_state::ExpenseTrackerApp;
use log::{info, warn};

impl ExpenseTrackerApp {
    /// Load reference data and the initial expense list.
    pub fn load_initial_data(&mut self) {
        info!("📊 Loading initial data");

        self.reference_data.load();
        if let Some(message) = self.reference_data.failure() {
            self.ui
                .set_error(format!("Failed to load reference data: {message}"));
        }

        self.refresh_expenses();
    }

    /// Replace the expense snapshot with the store's current contents.
    ///
    /// Returns whether the refresh succeeded. On failure the previous
    /// snapshot is kept and the error banner is set.
    pub fn refresh_expenses(&mut self) -> bool {
        match self.repository.list() {
            Ok(expenses) => {
                info!("📊 Loaded {} expenses", expenses.len());
                self.expenses = expenses;
                true
            }
            Err(e) => {
                warn!("Failed to load expenses: {e}");
                self.ui.set_error(format!("Failed to load expenses: {e}"));
                false
            }
        }
    }

    /// Retry any reference dataset that failed to load.
    ///
    /// Datasets already cached are not fetched again.
    pub fn retry_reference_data(&mut self) {
        self.ui.clear_messages();
        self.reference_data.load();
        if let Some(message) = self.reference_data.failure() {
            self.ui
                .set_error(format!("Failed to load reference data: {message}"));
        }
    }
}
