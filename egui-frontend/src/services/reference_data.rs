//! # Reference Data Store
//!
//! Session cache for the two small lookup datasets: expense categories and
//! payment modes.
//!
//! ## Responsibilities:
//! - Fetch each dataset at most once per session and cache it indefinitely
//! - Track loading / ready / failed state per dataset
//! - Expose id-to-name maps and (id, label) option lists for selection UI
//!
//! ## Purpose:
//! Reference data is assumed static for the lifetime of a session, so
//! there is no background refresh and no invalidation path. An id that is
//! missing from a loaded map is a valid state (stale foreign key), looked
//! up as `None` and rendered as empty, never an error.

use crate::services::api::ExpenseApi;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Lifecycle of one lazily fetched dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// Cached reference datasets and their derived lookup maps.
pub struct ReferenceDataStore {
    api: Arc<dyn ExpenseApi>,
    pub categories: LoadState<Vec<(i64, String)>>,
    pub payment_modes: LoadState<Vec<(i64, String)>>,
    category_names: HashMap<i64, String>,
    payment_mode_names: HashMap<i64, String>,
}

impl ReferenceDataStore {
    pub fn new(api: Arc<dyn ExpenseApi>) -> Self {
        Self {
            api,
            categories: LoadState::Loading,
            payment_modes: LoadState::Loading,
            category_names: HashMap::new(),
            payment_mode_names: HashMap::new(),
        }
    }

    /// Load whichever datasets are not yet ready.
    ///
    /// Successful loads are cached for the rest of the session; calling
    /// this again only re-fetches datasets that previously failed.
    pub fn load(&mut self) {
        if !self.categories.is_ready() {
            self.categories = match self.api.list_categories() {
                Ok(response) => {
                    let options: Vec<(i64, String)> = response
                        .expense_categories
                        .into_iter()
                        .map(|c| (c.id, c.name))
                        .collect();
                    self.category_names = options.iter().cloned().collect();
                    info!("Loaded {} expense categories", options.len());
                    LoadState::Ready(options)
                }
                Err(e) => {
                    warn!("Failed to load expense categories: {e}");
                    LoadState::Failed(e.to_string())
                }
            };
        }

        if !self.payment_modes.is_ready() {
            self.payment_modes = match self.api.list_payment_modes() {
                Ok(response) => {
                    let options: Vec<(i64, String)> = response
                        .payment_modes
                        .into_iter()
                        .map(|m| (m.id, m.name))
                        .collect();
                    self.payment_mode_names = options.iter().cloned().collect();
                    info!("Loaded {} payment modes", options.len());
                    LoadState::Ready(options)
                }
                Err(e) => {
                    warn!("Failed to load payment modes: {e}");
                    LoadState::Failed(e.to_string())
                }
            };
        }
    }

    /// Whether both datasets are loaded and the table may render.
    pub fn is_ready(&self) -> bool {
        self.categories.is_ready() && self.payment_modes.is_ready()
    }

    /// First load failure, if any dataset is in the failed state.
    pub fn failure(&self) -> Option<&str> {
        if let LoadState::Failed(message) = &self.categories {
            return Some(message);
        }
        if let LoadState::Failed(message) = &self.payment_modes {
            return Some(message);
        }
        None
    }

    /// Resolve a category id; `None` when the id is not in the loaded map.
    pub fn category_name(&self, id: i64) -> Option<&str> {
        self.category_names.get(&id).map(String::as_str)
    }

    /// Resolve a payment-mode id; `None` when the id is not in the loaded map.
    pub fn payment_mode_name(&self, id: i64) -> Option<&str> {
        self.payment_mode_names.get(&id).map(String::as_str)
    }

    /// (id, label) choices for the category select, empty until ready.
    pub fn category_options(&self) -> Vec<(i64, String)> {
        match &self.categories {
            LoadState::Ready(options) => options.clone(),
            _ => Vec::new(),
        }
    }

    /// (id, label) choices for the payment-mode select, empty until ready.
    pub fn payment_mode_options(&self) -> Vec<(i64, String)> {
        match &self.payment_modes {
            LoadState::Ready(options) => options.clone(),
            _ => Vec::new(),
        }
    }
}
