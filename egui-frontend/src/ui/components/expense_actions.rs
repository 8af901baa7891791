//! # Expense Actions Module
//!
//! Interaction handlers connecting the dialogs to the store: create,
//! update and delete flows.
//!
//! ## Responsibilities:
//! - Open and submit the create/update dialog
//! - Gate deletes behind an explicit confirmation
//! - Keep the mutation sequence fixed: mutate, refresh, then close
//!
//! ## Purpose:
//! Every successful mutation is followed by a full list refresh before the
//! dialog closes, so the table only ever shows what the store returned. A
//! failed mutation leaves the dialog open with the draft intact and the
//! snapshot untouched. Validation runs before any request is built, so an
//! invalid draft never touches the network.
//!
//! At most one dialog can be on screen. The dialog windows are not
//! OS-modal, so the table's row buttons stay clickable underneath them;
//! every dialog-opening handler therefore ignores itself while another
//! dialog is open instead of tearing down an in-progress draft.

use crate::services::api::ApiError;
use crate::ui::state::app_state::ExpenseTrackerApp;
use crate::ui::state::form_state::DialogMode;
use log::{info, warn};

impl ExpenseTrackerApp {
    /// Open the create dialog over a fresh draft.
    ///
    /// Ignored while any dialog is already open.
    pub fn open_create_dialog(&mut self) {
        if self.dialog_open() {
            return;
        }
        self.ui.clear_messages();
        self.form.start_create();
    }

    /// Fetch the targeted record and open the update dialog populated
    /// from it. If the fetch fails no dialog opens.
    ///
    /// Ignored while any dialog is already open.
    pub fn request_update(&mut self, id: i64) {
        if self.dialog_open() {
            return;
        }
        self.ui.clear_messages();
        self.form.begin_update_load(id);
        match self.repository.get(id) {
            Ok(expense) => {
                info!("✏️ Editing expense {id}");
                self.form.finish_update_load(&expense);
            }
            Err(ApiError::NotFound) => {
                warn!("Expense {id} no longer exists");
                self.form.fail_update_load();
                self.ui
                    .set_error("That expense no longer exists.".to_string());
                self.refresh_expenses();
            }
            Err(e) => {
                warn!("Failed to load expense {id}: {e}");
                self.form.fail_update_load();
                self.ui.set_error(format!("Failed to load expense: {e}"));
            }
        }
    }

    /// Validate the draft and run the create or update the open dialog
    /// calls for.
    ///
    /// A validation failure is shown inline and nothing is sent. A store
    /// failure is shown inline and the dialog stays open over the intact
    /// draft. Only after a successful mutation and list refresh does the
    /// dialog close.
    pub fn submit_form(&mut self) {
        let input = match self.form.build_request() {
            Ok(input) => input,
            Err(e) => {
                self.form.error = Some(e.to_string());
                return;
            }
        };

        let result = match self.form.mode {
            DialogMode::Creating => {
                info!("➕ Creating expense");
                self.repository.create(&input).map(|_| ())
            }
            DialogMode::Updating(id) => {
                info!("✏️ Updating expense {id}");
                self.repository.update(id, &input).map(|_| ())
            }
            // build_request already rejected these modes
            DialogMode::Closed | DialogMode::LoadingForUpdate(_) => return,
        };

        match result {
            Ok(()) => {
                self.refresh_expenses();
                self.form.cancel();
            }
            Err(e) => {
                warn!("Expense mutation failed: {e}");
                self.form.error = Some(format!("Saving failed: {e}"));
            }
        }
    }

    /// Ask for confirmation before deleting.
    ///
    /// Ignored while any dialog is already open.
    pub fn request_delete(&mut self, id: i64) {
        if self.dialog_open() {
            return;
        }
        self.ui.clear_messages();
        self.pending_delete = Some(id);
    }

    /// The user confirmed the pending delete.
    ///
    /// On failure the confirmation is not re-opened; the error lands in
    /// the banner and the list keeps its current snapshot.
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        match self.repository.remove(id) {
            Ok(()) => {
                info!("🗑️ Deleted expense {id}");
                self.refresh_expenses();
            }
            Err(e) => {
                warn!("Failed to delete expense {id}: {e}");
                self.ui.set_error(format!("Failed to delete expense: {e}"));
            }
        }
    }

    /// The user declined the pending delete.
    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::FakeApi;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn app_with(api: Arc<FakeApi>) -> ExpenseTrackerApp {
        let mut app = ExpenseTrackerApp::new(api);
        app.load_initial_data();
        app
    }

    fn fill_form(app: &mut ExpenseTrackerApp) {
        app.form.amount_input = "50".to_string();
        app.form.expense_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        app.form.description = "coffee".to_string();
        app.form.expense_category_id = Some(2);
        app.form.payment_mode_id = Some(1);
    }

    #[test]
    fn test_successful_create_refreshes_then_closes() {
        let api = Arc::new(FakeApi::new());
        let mut app = app_with(api.clone());

        app.open_create_dialog();
        fill_form(&mut app);
        app.submit_form();

        assert_eq!(app.form.mode, DialogMode::Closed);
        assert_eq!(app.expenses.len(), 1);
        assert_eq!(app.expenses[0].description, "coffee");

        // The mutation lands before the snapshot is re-read.
        let calls = api.calls();
        let create_at = calls.iter().position(|c| *c == "create_expense").unwrap();
        let refresh_at = calls.iter().rposition(|c| *c == "list_expenses").unwrap();
        assert!(create_at < refresh_at);
    }

    #[test]
    fn test_failed_create_keeps_dialog_draft_and_snapshot() {
        let api = Arc::new(FakeApi::new());
        let mut app = app_with(api.clone());

        app.open_create_dialog();
        fill_form(&mut app);
        api.fail_create.set(true);
        let lists_before = api
            .calls()
            .iter()
            .filter(|c| **c == "list_expenses")
            .count();
        app.submit_form();

        assert_eq!(app.form.mode, DialogMode::Creating);
        assert_eq!(app.form.description, "coffee");
        assert!(app.form.error.is_some());
        assert!(app.expenses.is_empty());
        // No refresh happened after the failed mutation.
        let lists_after = api
            .calls()
            .iter()
            .filter(|c| **c == "list_expenses")
            .count();
        assert_eq!(lists_before, lists_after);
    }

    #[test]
    fn test_invalid_draft_never_reaches_the_store() {
        let api = Arc::new(FakeApi::new());
        let mut app = app_with(api.clone());

        app.open_create_dialog();
        app.submit_form();

        assert_eq!(app.form.mode, DialogMode::Creating);
        assert!(app.form.error.is_some());
        assert!(!api.calls().contains(&"create_expense"));
    }

    #[test]
    fn test_update_flow_saves_through_the_update_endpoint() {
        let api = Arc::new(FakeApi::new());
        let id = api.push_expense("2024-06-01", 50.0, "coffee", 2, 1);
        let mut app = app_with(api.clone());

        app.request_update(id);
        assert_eq!(app.form.mode, DialogMode::Updating(id));
        assert_eq!(app.form.description, "coffee");

        app.form.description = "espresso".to_string();
        app.submit_form();

        assert_eq!(app.form.mode, DialogMode::Closed);
        assert!(api.calls().contains(&"update_expense"));
        assert!(!api.calls().contains(&"create_expense"));
        assert_eq!(app.expenses[0].description, "espresso");
    }

    #[test]
    fn test_update_of_a_vanished_record_closes_without_a_dialog() {
        let api = Arc::new(FakeApi::new());
        let mut app = app_with(api.clone());

        app.request_update(99);

        assert_eq!(app.form.mode, DialogMode::Closed);
        assert!(app.ui.error_message.is_some());
    }

    #[test]
    fn test_edit_and_delete_clicks_are_ignored_while_a_dialog_is_open() {
        let api = Arc::new(FakeApi::new());
        let id = api.push_expense("2024-06-01", 9.5, "snacks", 2, 1);
        let mut app = app_with(api.clone());

        app.open_create_dialog();
        fill_form(&mut app);

        // An Edit click on a row underneath the open form must not
        // hijack the dialog or destroy the typed draft.
        app.request_update(id);
        assert_eq!(app.form.mode, DialogMode::Creating);
        assert_eq!(app.form.description, "coffee");
        assert!(!api.calls().contains(&"get_expense"));

        // Nor may a Delete click stack the confirmation on top.
        app.request_delete(id);
        assert_eq!(app.pending_delete, None);

        // And a second Add click must not wipe the draft either.
        app.open_create_dialog();
        assert_eq!(app.form.description, "coffee");
    }

    #[test]
    fn test_pending_delete_blocks_the_form_dialogs() {
        let api = Arc::new(FakeApi::new());
        let id = api.push_expense("2024-06-01", 50.0, "coffee", 2, 1);
        let mut app = app_with(api.clone());

        app.request_delete(id);
        app.open_create_dialog();
        app.request_update(id);
        assert_eq!(app.form.mode, DialogMode::Closed);
        assert_eq!(app.pending_delete, Some(id));

        // Declining frees the screen for the next dialog.
        app.decline_delete();
        app.open_create_dialog();
        assert_eq!(app.form.mode, DialogMode::Creating);
    }

    #[test]
    fn test_delete_waits_for_confirmation() {
        let api = Arc::new(FakeApi::new());
        let id = api.push_expense("2024-06-01", 50.0, "coffee", 2, 1);
        let mut app = app_with(api.clone());

        app.request_delete(id);
        assert_eq!(app.pending_delete, Some(id));
        assert!(!api.calls().contains(&"delete_expense"));

        app.confirm_delete();
        assert_eq!(app.pending_delete, None);
        assert!(api.calls().contains(&"delete_expense"));
        assert!(app.expenses.is_empty());
    }

    #[test]
    fn test_declined_delete_touches_nothing() {
        let api = Arc::new(FakeApi::new());
        let id = api.push_expense("2024-06-01", 50.0, "coffee", 2, 1);
        let mut app = app_with(api.clone());

        app.request_delete(id);
        app.decline_delete();

        assert_eq!(app.pending_delete, None);
        assert!(!api.calls().contains(&"delete_expense"));
        assert_eq!(app.expenses.len(), 1);
    }

    #[test]
    fn test_failed_delete_reports_without_reprompting() {
        let api = Arc::new(FakeApi::new());
        let id = api.push_expense("2024-06-01", 50.0, "coffee", 2, 1);
        let mut app = app_with(api.clone());

        api.fail_delete.set(true);
        app.request_delete(id);
        app.confirm_delete();

        assert_eq!(app.pending_delete, None);
        assert!(app.ui.error_message.is_some());
        assert_eq!(app.expenses.len(), 1);
    }
}
