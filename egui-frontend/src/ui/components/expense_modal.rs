//! # Expense Modal Module
//!
//! The create/update dialog: one form rendered for both flows, with the
//! heading and submit wiring chosen by the current dialog mode.

use crate::ui::state::app_state::ExpenseTrackerApp;
use crate::ui::state::form_state::DialogMode;
use eframe::egui;
use egui_extras::DatePickerButton;

impl ExpenseTrackerApp {
    /// Render the create/update dialog when one is open.
    pub fn render_expense_modal(&mut self, ctx: &egui::Context) {
        let title = match self.form.mode {
            DialogMode::Closed => return,
            DialogMode::Creating => "Add Expense",
            DialogMode::LoadingForUpdate(_) | DialogMode::Updating(_) => "Edit Expense",
        };

        let mut submit = false;
        let mut cancel = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if matches!(self.form.mode, DialogMode::LoadingForUpdate(_)) {
                    ui.spinner();
                    return;
                }

                egui::Grid::new("expense_form_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Amount");
                        ui.text_edit_singleline(&mut self.form.amount_input);
                        ui.end_row();

                        ui.label("Date");
                        ui.add(
                            DatePickerButton::new(&mut self.form.expense_date)
                                .id_source("expense_date_picker"),
                        );
                        ui.end_row();

                        ui.label("Description");
                        ui.text_edit_singleline(&mut self.form.description);
                        ui.end_row();

                        ui.label("Category");
                        let selected = self
                            .form
                            .expense_category_id
                            .and_then(|id| self.reference_data.category_name(id))
                            .unwrap_or("Select…")
                            .to_string();
                        egui::ComboBox::from_id_source("expense_category_select")
                            .selected_text(selected)
                            .show_ui(ui, |ui| {
                                for (id, name) in self.reference_data.category_options() {
                                    ui.selectable_value(
                                        &mut self.form.expense_category_id,
                                        Some(id),
                                        name,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("Payment Mode");
                        let selected = self
                            .form
                            .payment_mode_id
                            .and_then(|id| self.reference_data.payment_mode_name(id))
                            .unwrap_or("Select…")
                            .to_string();
                        egui::ComboBox::from_id_source("payment_mode_select")
                            .selected_text(selected)
                            .show_ui(ui, |ui| {
                                for (id, name) in self.reference_data.payment_mode_options() {
                                    ui.selectable_value(
                                        &mut self.form.payment_mode_id,
                                        Some(id),
                                        name,
                                    );
                                }
                            });
                        ui.end_row();
                    });

                if let Some(error) = &self.form.error {
                    ui.colored_label(egui::Color32::RED, error);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if submit {
            self.submit_form();
        }
        if cancel {
            self.form.cancel();
        }
    }
}
