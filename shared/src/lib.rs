//! Wire-format types for the expense API.
//!
//! These structs mirror the JSON bodies exchanged with the backing store
//! (`/v1/expenses`, `/v1/expense-categories`, `/v1/payment-modes`). The API
//! uses camelCase field names and plain `YYYY-MM-DD` strings for dates;
//! conversion to calendar dates happens in the frontend's date codec, not
//! here.

use serde::{Deserialize, Serialize};

/// An expense record as returned by the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDto {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,
    /// Calendar date of the expense in `YYYY-MM-DD` form (no time-of-day)
    pub expense_date: String,
    /// Positive decimal amount
    pub amount: f64,
    /// Free-text description (may be empty on persisted records)
    pub description: String,
    /// Foreign key into the expense-category reference set
    pub expense_category_id: i64,
    /// Foreign key into the payment-mode reference set
    pub payment_mode_id: i64,
}

/// Response body of `GET /v1/expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<ExpenseDto>,
}

/// Request body shared by `POST /v1/expenses` and `PUT /v1/expenses/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    /// Calendar date in `YYYY-MM-DD` form
    pub expense_date: String,
    pub amount: f64,
    pub description: String,
    pub expense_category_id: i64,
    pub payment_mode_id: i64,
}

/// A single expense category (reference data, session-static).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategoryDto {
    pub id: i64,
    pub name: String,
}

/// Response body of `GET /v1/expense-categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategoryListResponse {
    pub expense_categories: Vec<ExpenseCategoryDto>,
}

/// A single payment mode (reference data, session-static).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentModeDto {
    pub id: i64,
    pub name: String,
}

/// Response body of `GET /v1/payment-modes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentModeListResponse {
    pub payment_modes: Vec<PaymentModeDto>,
}
