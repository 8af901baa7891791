//! # UI Components Module
//!
//! This module organizes all UI components for the expense tracker
//! application. Each submodule handles a specific aspect of the interface.
//!
//! ## Module Organization:
//! - `data_loading` - Initial bootstrap and expense list refresh
//! - `expense_actions` - Interaction handlers for create, update and delete
//! - `expense_table` - Expense table rendering and id-to-name resolution
//! - `expense_modal` - The create/update dialog
//! - `delete_confirm` - The delete confirmation dialog

pub mod data_loading;
pub mod delete_confirm;
pub mod expense_actions;
pub mod expense_modal;
pub mod expense_table;
