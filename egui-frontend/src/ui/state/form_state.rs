//! # Expense Form State
//!
//! The create/update dialog's draft fields and its mode state machine.
//!
//! ## Responsibilities:
//! - Hold the transient form draft (amount, date, description, category,
//!   payment mode)
//! - Track which dialog is open through a single tagged `DialogMode`
//! - Validate the draft into a request, or report the first unmet field
//!
//! ## Purpose:
//! Dialog visibility used to be the classic pair of booleans plus a
//! separately tracked target id, which allows two dialogs at once and a
//! stale id outliving its dialog. Collapsing that into one enum makes
//! those states unrepresentable: exactly one dialog can be visible, and an
//! update target id cannot exist outside an update flow.
//!
//! ## State machine:
//! `Closed → Creating → Closed` (cancel or successful submit), and
//! `Closed → LoadingForUpdate(id) → Updating(id) → Closed`, with
//! `LoadingForUpdate → Closed` on a failed fetch. Nothing else is a legal
//! transition, and building a request while `Closed` or
//! `LoadingForUpdate` is a programming error reported as `NotEditing`.

use crate::services::date_utils::today;
use crate::services::expenses::{Expense, ExpenseInput};
use chrono::NaiveDate;
use log::error;
use thiserror::Error;

/// Which dialog is currently visible, and for which record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// No dialog visible
    Closed,
    /// Create dialog open over a fresh draft
    Creating,
    /// Update requested; the record is still being fetched
    LoadingForUpdate(i64),
    /// Update dialog open over a draft populated from the fetched record
    Updating(i64),
}

/// First unmet requirement found while building a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no dialog is open for editing")]
    NotEditing,
    #[error("amount is required")]
    MissingAmount,
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("description is required")]
    MissingDescription,
    #[error("category is required")]
    MissingCategory,
    #[error("payment mode is required")]
    MissingPaymentMode,
}

/// Draft fields plus the dialog-mode state machine.
///
/// The amount is kept as the raw text the user typed and parsed at submit;
/// the date is a calendar date defaulted to today, so "date absent" is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFormState {
    pub mode: DialogMode,
    pub amount_input: String,
    pub expense_date: NaiveDate,
    pub description: String,
    pub expense_category_id: Option<i64>,
    pub payment_mode_id: Option<i64>,
    /// Validation or submit failure shown inline in the dialog
    pub error: Option<String>,
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self {
            mode: DialogMode::Closed,
            amount_input: String::new(),
            expense_date: today(),
            description: String::new(),
            expense_category_id: None,
            payment_mode_id: None,
            error: None,
        }
    }

    /// Reset every draft field to its default. The mode is left alone.
    fn reset_draft(&mut self) {
        self.amount_input.clear();
        self.expense_date = today();
        self.description.clear();
        self.expense_category_id = None;
        self.payment_mode_id = None;
        self.error = None;
    }

    /// Open the create dialog over a fresh draft.
    pub fn start_create(&mut self) {
        self.reset_draft();
        self.mode = DialogMode::Creating;
    }

    /// Mark an update as requested while the record is fetched.
    pub fn begin_update_load(&mut self, id: i64) {
        self.reset_draft();
        self.mode = DialogMode::LoadingForUpdate(id);
    }

    /// Populate the draft from the fetched record and open the update
    /// dialog. Only legal while `LoadingForUpdate`.
    pub fn finish_update_load(&mut self, expense: &Expense) {
        let DialogMode::LoadingForUpdate(id) = self.mode else {
            error!(
                "finish_update_load called in mode {:?}; ignoring",
                self.mode
            );
            return;
        };
        self.amount_input = format_amount_input(expense.amount);
        self.expense_date = expense.expense_date;
        self.description = expense.description.clone();
        self.expense_category_id = Some(expense.expense_category_id);
        self.payment_mode_id = Some(expense.payment_mode_id);
        self.error = None;
        self.mode = DialogMode::Updating(id);
    }

    /// The update fetch failed; close without opening the dialog.
    pub fn fail_update_load(&mut self) {
        self.reset_draft();
        self.mode = DialogMode::Closed;
    }

    /// Close the dialog and discard any in-progress edits.
    pub fn cancel(&mut self) {
        self.reset_draft();
        self.mode = DialogMode::Closed;
    }

    /// Validate the draft into a request.
    ///
    /// Fields are checked in the order amount, date, description,
    /// category, payment mode; the first unmet one wins. The date cannot
    /// be absent by construction, so it never fails. No network call is
    /// made here.
    pub fn build_request(&self) -> Result<ExpenseInput, ValidationError> {
        match self.mode {
            DialogMode::Creating | DialogMode::Updating(_) => {}
            DialogMode::Closed | DialogMode::LoadingForUpdate(_) => {
                error!("build_request called in mode {:?}", self.mode);
                return Err(ValidationError::NotEditing);
            }
        }

        let amount_text = self.amount_input.trim();
        if amount_text.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount: f64 = amount_text
            .parse()
            .map_err(|_| ValidationError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }

        if self.description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }

        let expense_category_id = self
            .expense_category_id
            .ok_or(ValidationError::MissingCategory)?;
        let payment_mode_id = self
            .payment_mode_id
            .ok_or(ValidationError::MissingPaymentMode)?;

        Ok(ExpenseInput {
            expense_date: self.expense_date,
            amount,
            description: self.description.clone(),
            expense_category_id,
            payment_mode_id,
        })
    }
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an amount for the editable text buffer without a trailing `.0`
/// on whole numbers.
fn format_amount_input(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}
