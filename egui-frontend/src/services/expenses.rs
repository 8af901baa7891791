//! # Expense Repository
//!
//! The domain `Expense` entity and the CRUD operations that manage it.
//!
//! ## Responsibilities:
//! - Map wire DTOs (string dates) to the domain entity (calendar dates)
//! - list / get / create / update / remove against the expense collection
//!
//! ## Purpose:
//! Everything above this layer works with `chrono::NaiveDate`; everything
//! below it works with `YYYY-MM-DD` strings. The conversion in both
//! directions goes through the date codec. None of these operations touch
//! the controller's in-memory list: the controller re-lists after every
//! successful mutation.

use crate::services::api::{ApiError, ExpenseApi};
use crate::services::date_utils::{format_iso_date, parse_iso_date};
use chrono::NaiveDate;
use shared::{ExpenseDto, ExpensePayload};
use std::sync::Arc;

/// A single expense record.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub expense_date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub expense_category_id: i64,
    pub payment_mode_id: i64,
}

impl Expense {
    fn from_dto(dto: ExpenseDto) -> Result<Self, ApiError> {
        let expense_date = parse_iso_date(&dto.expense_date).map_err(|e| {
            ApiError::Decode(format!(
                "bad expenseDate {:?} on expense {}: {e}",
                dto.expense_date, dto.id
            ))
        })?;
        Ok(Self {
            id: dto.id,
            expense_date,
            amount: dto.amount,
            description: dto.description,
            expense_category_id: dto.expense_category_id,
            payment_mode_id: dto.payment_mode_id,
        })
    }
}

/// A validated set of expense fields, ready to send to the store.
///
/// Produced by the form's `build_request`; all fields are guaranteed
/// present and the amount positive.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub expense_date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub expense_category_id: i64,
    pub payment_mode_id: i64,
}

impl ExpenseInput {
    fn to_payload(&self) -> ExpensePayload {
        ExpensePayload {
            expense_date: format_iso_date(self.expense_date),
            amount: self.amount,
            description: self.description.clone(),
            expense_category_id: self.expense_category_id,
            payment_mode_id: self.payment_mode_id,
        }
    }
}

/// CRUD operations on the expense collection.
pub struct ExpenseRepository {
    api: Arc<dyn ExpenseApi>,
}

impl ExpenseRepository {
    pub fn new(api: Arc<dyn ExpenseApi>) -> Self {
        Self { api }
    }

    /// Fetch every expense, in whatever order the store returns them.
    pub fn list(&self) -> Result<Vec<Expense>, ApiError> {
        let response = self.api.list_expenses()?;
        response
            .expenses
            .into_iter()
            .map(Expense::from_dto)
            .collect()
    }

    /// Fetch a single expense; `ApiError::NotFound` if the id is gone.
    pub fn get(&self, id: i64) -> Result<Expense, ApiError> {
        Expense::from_dto(self.api.get_expense(id)?)
    }

    /// Create an expense and return the canonical stored record
    /// (authoritative id and any server-assigned defaults).
    pub fn create(&self, input: &ExpenseInput) -> Result<Expense, ApiError> {
        Expense::from_dto(self.api.create_expense(&input.to_payload())?)
    }

    /// Update an existing expense; `ApiError::NotFound` if it was deleted
    /// concurrently.
    pub fn update(&self, id: i64, input: &ExpenseInput) -> Result<Expense, ApiError> {
        Expense::from_dto(self.api.update_expense(id, &input.to_payload())?)
    }

    /// Delete an expense; `ApiError::NotFound` if already deleted.
    pub fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete_expense(id)
    }
}
