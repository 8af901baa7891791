//! # Delete Confirmation Module
//!
//! The confirmation dialog shown before any delete is sent. Declining is
//! the default-looking choice; nothing is deleted until the user says yes.

use crate::ui::state::app_state::ExpenseTrackerApp;
use eframe::egui;

impl ExpenseTrackerApp {
    /// Render the delete confirmation when a delete is pending.
    pub fn render_delete_confirm(&mut self, ctx: &egui::Context) {
        if self.pending_delete.is_none() {
            return;
        }

        let mut confirmed = false;
        let mut declined = false;

        egui::Window::new("Delete Expense")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Do you want to delete this expense?");
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("No").clicked() {
                        declined = true;
                    }
                    if ui.button("Yes, delete").clicked() {
                        confirmed = true;
                    }
                });
            });

        if confirmed {
            self.confirm_delete();
        }
        if declined {
            self.decline_delete();
        }
    }
}
