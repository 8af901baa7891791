//! # Expense Tracker (egui frontend)
//!
//! Desktop client for the expense API: a table of expense records with
//! create, update and delete flows, backed by a small HTTP store.
//!
//! - `services` - transport, date codec, repository and reference cache
//! - `ui` - application state, interaction handlers and rendering

pub mod services;
pub mod ui;
