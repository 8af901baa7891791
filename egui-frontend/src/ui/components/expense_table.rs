//! # Expense Table Module
//!
//! Renders the expense list with reference ids resolved to display names.
//!
//! ## Responsibilities:
//! - Gate rendering until both reference datasets are loaded
//! - Resolve category and payment-mode ids through the reference cache
//! - Offer Edit and Delete per row and Add Expense above the table
//!
//! ## Purpose:
//! Rows are shown in the exact order the store returned them; the table
//! never sorts or filters. An id the reference cache cannot resolve
//! renders as an empty cell, not an error.

use crate::services::date_utils::format_iso_date;
use crate::services::expenses::Expense;
use crate::services::reference_data::ReferenceDataStore;
use crate::ui::state::app_state::ExpenseTrackerApp;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

/// Per-row action picked up from the rendered buttons.
enum RowAction {
    Edit(i64),
    Delete(i64),
}

/// One expense flattened to the strings the table shows.
#[derive(Debug, PartialEq)]
pub struct ExpenseRow {
    pub date: String,
    pub amount: String,
    pub description: String,
    pub category: String,
    pub payment_mode: String,
}

impl ExpenseRow {
    /// Resolve an expense against the reference cache. Unresolved ids
    /// come out as empty strings.
    pub fn resolve(expense: &Expense, reference_data: &ReferenceDataStore) -> Self {
        Self {
            date: format_iso_date(expense.expense_date),
            amount: format!("{:.2}", expense.amount),
            description: expense.description.clone(),
            category: reference_data
                .category_name(expense.expense_category_id)
                .unwrap_or("")
                .to_string(),
            payment_mode: reference_data
                .payment_mode_name(expense.payment_mode_id)
                .unwrap_or("")
                .to_string(),
        }
    }
}

impl ExpenseTrackerApp {
    /// Render the toolbar, the error banner and the expense table.
    pub fn render_expense_list(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Expenses");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add = egui::Button::new("➕ Add Expense");
                if ui.add_enabled(!self.dialog_open(), add).clicked() {
                    self.open_create_dialog();
                }
            });
        });

        if let Some(message) = self.ui.error_message.clone() {
            ui.colored_label(egui::Color32::RED, message);
        }

        if !self.reference_data.is_ready() {
            if self.reference_data.failure().is_some() {
                ui.label("Reference data could not be loaded.");
                if ui.button("Retry").clicked() {
                    self.retry_reference_data();
                }
            } else {
                ui.label("Loading reference data…");
            }
            return;
        }

        if self.expenses.is_empty() {
            ui.label("No expenses yet!");
            return;
        }

        ui.separator();
        if let Some(action) = self.render_table(ui) {
            match action {
                RowAction::Edit(id) => self.request_update(id),
                RowAction::Delete(id) => self.request_delete(id),
            }
        }
    }

    fn render_table(&self, ui: &mut egui::Ui) -> Option<RowAction> {
        let mut action = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(100.0)) // DATE
            .column(Column::exact(90.0)) // AMOUNT
            .column(Column::remainder()) // DESCRIPTION
            .column(Column::exact(130.0)) // CATEGORY
            .column(Column::exact(130.0)) // PAYMENT MODE
            .column(Column::exact(130.0)) // actions
            .header(24.0, |mut header| {
                for title in [
                    "Date",
                    "Amount",
                    "Description",
                    "Category",
                    "Payment Mode",
                    "",
                ] {
                    header.col(|ui| {
                        ui.label(egui::RichText::new(title).strong());
                    });
                }
            })
            .body(|mut body| {
                for expense in &self.expenses {
                    let row_data = ExpenseRow::resolve(expense, &self.reference_data);
                    body.row(28.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&row_data.date);
                        });
                        row.col(|ui| {
                            ui.label(&row_data.amount);
                        });
                        row.col(|ui| {
                            ui.label(&row_data.description);
                        });
                        row.col(|ui| {
                            ui.label(&row_data.category);
                        });
                        row.col(|ui| {
                            ui.label(&row_data.payment_mode);
                        });
                        row.col(|ui| {
                            let enabled = !self.dialog_open();
                            if ui
                                .add_enabled(enabled, egui::Button::new("Edit"))
                                .clicked()
                            {
                                action = Some(RowAction::Edit(expense.id));
                            }
                            if ui
                                .add_enabled(enabled, egui::Button::new("Delete"))
                                .clicked()
                            {
                                action = Some(RowAction::Delete(expense.id));
                            }
                        });
                    });
                }
            });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::FakeApi;
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[test]
    fn test_rows_resolve_ids_to_names_and_blank_out_unknowns() {
        let api = Arc::new(FakeApi::new());
        let mut reference_data = ReferenceDataStore::new(api);
        reference_data.load();

        let known = Expense {
            id: 1,
            expense_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            amount: 50.0,
            description: "coffee".to_string(),
            expense_category_id: 2,
            payment_mode_id: 1,
        };
        let row = ExpenseRow::resolve(&known, &reference_data);
        assert_eq!(row.date, "2024-06-01");
        assert_eq!(row.amount, "50.00");
        assert_eq!(row.category, "Food");
        assert_eq!(row.payment_mode, "Cash");

        // Stale foreign keys render as empty cells.
        let stale = Expense {
            expense_category_id: 9,
            payment_mode_id: 9,
            ..known
        };
        let row = ExpenseRow::resolve(&stale, &reference_data);
        assert_eq!(row.category, "");
        assert_eq!(row.payment_mode, "");
    }
}
