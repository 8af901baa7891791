pub mod app_implementation;
pub mod components;
pub mod state;

pub use state::ExpenseTrackerApp;
