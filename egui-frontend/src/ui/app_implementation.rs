use crate::ui::state::app_state::ExpenseTrackerApp;
use eframe::egui;

impl eframe::App for ExpenseTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load reference data and the first snapshot on the first frame
        if !self.bootstrapped {
            self.bootstrapped = true;
            self.load_initial_data();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("💸 Expense Tracker")
                        .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                        .strong(),
                );
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_expense_list(ui);
            });
        });

        // Dialogs
        self.render_expense_modal(ctx);
        self.render_delete_confirm(ctx);
    }
}
