//! In-memory stand-in for the expense API, used across the unit tests.
//!
//! Holds its collections behind `RefCell` (the app is single-threaded),
//! records every call so ordering assertions can be made, and exposes
//! per-endpoint failure switches.

use crate::services::api::{ApiError, ExpenseApi};
use shared::{
    ExpenseCategoryDto, ExpenseCategoryListResponse, ExpenseDto, ExpenseListResponse,
    ExpensePayload, PaymentModeDto, PaymentModeListResponse,
};
use std::cell::{Cell, RefCell};

/// Fake `ExpenseApi` with reference data `{2: Food, 3: Travel}` and
/// `{1: Cash, 2: Card}` preloaded and no expenses.
pub struct FakeApi {
    expenses: RefCell<Vec<ExpenseDto>>,
    categories: Vec<ExpenseCategoryDto>,
    payment_modes: Vec<PaymentModeDto>,
    next_id: Cell<i64>,
    calls: RefCell<Vec<&'static str>>,
    last_payload: RefCell<Option<ExpensePayload>>,

    pub fail_list: Cell<bool>,
    pub fail_get: Cell<bool>,
    pub fail_create: Cell<bool>,
    pub fail_update: Cell<bool>,
    pub fail_delete: Cell<bool>,
    pub fail_categories: Cell<bool>,
    pub fail_payment_modes: Cell<bool>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            expenses: RefCell::new(Vec::new()),
            categories: vec![
                ExpenseCategoryDto {
                    id: 2,
                    name: "Food".to_string(),
                },
                ExpenseCategoryDto {
                    id: 3,
                    name: "Travel".to_string(),
                },
            ],
            payment_modes: vec![
                PaymentModeDto {
                    id: 1,
                    name: "Cash".to_string(),
                },
                PaymentModeDto {
                    id: 2,
                    name: "Card".to_string(),
                },
            ],
            next_id: Cell::new(1),
            calls: RefCell::new(Vec::new()),
            last_payload: RefCell::new(None),
            fail_list: Cell::new(false),
            fail_get: Cell::new(false),
            fail_create: Cell::new(false),
            fail_update: Cell::new(false),
            fail_delete: Cell::new(false),
            fail_categories: Cell::new(false),
            fail_payment_modes: Cell::new(false),
        }
    }

    /// Seed an expense directly into the fake store and return its id.
    pub fn push_expense(
        &self,
        expense_date: &str,
        amount: f64,
        description: &str,
        expense_category_id: i64,
        payment_mode_id: i64,
    ) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.expenses.borrow_mut().push(ExpenseDto {
            id,
            expense_date: expense_date.to_string(),
            amount,
            description: description.to_string(),
            expense_category_id,
            payment_mode_id,
        });
        id
    }

    /// Names of every endpoint hit so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// The body of the most recent create/update request.
    pub fn last_payload(&self) -> Option<ExpensePayload> {
        self.last_payload.borrow().clone()
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.borrow().len()
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }

    fn injected_failure() -> ApiError {
        ApiError::Transport("injected failure".to_string())
    }
}

impl Default for FakeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseApi for FakeApi {
    fn list_expenses(&self) -> Result<ExpenseListResponse, ApiError> {
        self.record("list_expenses");
        if self.fail_list.get() {
            return Err(Self::injected_failure());
        }
        Ok(ExpenseListResponse {
            expenses: self.expenses.borrow().clone(),
        })
    }

    fn get_expense(&self, id: i64) -> Result<ExpenseDto, ApiError> {
        self.record("get_expense");
        if self.fail_get.get() {
            return Err(Self::injected_failure());
        }
        self.expenses
            .borrow()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    fn create_expense(&self, payload: &ExpensePayload) -> Result<ExpenseDto, ApiError> {
        self.record("create_expense");
        *self.last_payload.borrow_mut() = Some(payload.clone());
        if self.fail_create.get() {
            return Err(Self::injected_failure());
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = ExpenseDto {
            id,
            expense_date: payload.expense_date.clone(),
            amount: payload.amount,
            description: payload.description.clone(),
            expense_category_id: payload.expense_category_id,
            payment_mode_id: payload.payment_mode_id,
        };
        self.expenses.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_expense(&self, id: i64, payload: &ExpensePayload) -> Result<ExpenseDto, ApiError> {
        self.record("update_expense");
        *self.last_payload.borrow_mut() = Some(payload.clone());
        if self.fail_update.get() {
            return Err(Self::injected_failure());
        }
        let mut expenses = self.expenses.borrow_mut();
        let existing = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ApiError::NotFound)?;
        existing.expense_date = payload.expense_date.clone();
        existing.amount = payload.amount;
        existing.description = payload.description.clone();
        existing.expense_category_id = payload.expense_category_id;
        existing.payment_mode_id = payload.payment_mode_id;
        Ok(existing.clone())
    }

    fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        self.record("delete_expense");
        if self.fail_delete.get() {
            return Err(Self::injected_failure());
        }
        let mut expenses = self.expenses.borrow_mut();
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    fn list_categories(&self) -> Result<ExpenseCategoryListResponse, ApiError> {
        self.record("list_categories");
        if self.fail_categories.get() {
            return Err(Self::injected_failure());
        }
        Ok(ExpenseCategoryListResponse {
            expense_categories: self.categories.clone(),
        })
    }

    fn list_payment_modes(&self) -> Result<PaymentModeListResponse, ApiError> {
        self.record("list_payment_modes");
        if self.fail_payment_modes.get() {
            return Err(Self::injected_failure());
        }
        Ok(PaymentModeListResponse {
            payment_modes: self.payment_modes.clone(),
        })
    }
}
