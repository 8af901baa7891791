use eframe::egui;
use expense_tracker_egui::services::api::ApiClient;
use expense_tracker_egui::ui::ExpenseTrackerApp;
use log::{error, info};
use std::sync::Arc;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Expense Tracker egui application");

    let base_url =
        std::env::var("EXPENSE_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let bearer_token = std::env::var("EXPENSE_API_TOKEN").ok();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Expense Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window against {base_url}");
    eframe::run_native(
        "Expense Tracker",
        options,
        Box::new(move |_cc| match ApiClient::new(base_url, bearer_token) {
            Ok(client) => {
                info!("Successfully initialized expense tracker app");
                Ok(Box::new(ExpenseTrackerApp::new(Arc::new(client))))
            }
            Err(e) => {
                error!("Failed to initialize app: {e}");
                Err(format!("Failed to initialize app: {e}").into())
            }
        }),
    )
}
