//! # API Facade
//!
//! [`RosterApi`] is the single entry point for every roster operation,
//! whatever the front end. It owns the pieces of screen state that outlive a
//! single command: the list state, the router, the translator and the
//! confirmation dialog.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Keeps the list fresh**: every write reloads the list state from the
//!   store before returning
//! - **Moves the router** the way the screens do: forms are entered through
//!   their routes and a successful submit lands back on the list
//!
//! It does no printing and holds no business rules of its own.
//!
//! ## Generic Over EmployeeStore
//!
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::config::RosterConfig;
use crate::dialog::{ConfirmDialog, DialogOutcome};
use crate::error::{Result, RosterError};
use crate::i18n::Translator;
use crate::listing::ListState;
use crate::phone;
use crate::router::{Route, Router};
use crate::store::EmployeeStore;
use crate::validation::Field;

pub struct RosterApi<S: EmployeeStore> {
    store: S,
    paths: commands::RosterPaths,
    translator: Translator,
    list: ListState,
    router: Router,
    dialog: ConfirmDialog,
}

impl<S: EmployeeStore> RosterApi<S> {
    pub fn new(store: S, paths: commands::RosterPaths, config: &RosterConfig) -> Self {
        let translator = Translator::new(config.language);
        let mut list = ListState::new(config.page_size);
        list.set_view_mode(config.view_mode);
        let dialog = ConfirmDialog::new(&translator);
        Self {
            store,
            paths,
            translator,
            list,
            router: Router::new(),
            dialog,
        }
    }

    pub fn list_employees(&mut self, request: ListRequest) -> Result<commands::CmdResult> {
        self.router.go(Route::List);
        commands::list::run(&self.store, &mut self.list, request)
    }

    pub fn get_employee(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn create_employee(&mut self, values: &[(Field, String)]) -> Result<commands::CmdResult> {
        self.router.go(Route::Create);
        let result = commands::create::run(&mut self.store, &self.translator, values)?;
        self.after_write()?;
        Ok(result)
    }

    pub fn update_employee(
        &mut self,
        id: &str,
        values: &[(Field, String)],
    ) -> Result<commands::CmdResult> {
        if self.router.navigate(&Route::Edit(id.to_string()).path()) == &Route::List {
            return Err(RosterError::EmployeeNotFound(id.to_string()));
        }
        match commands::update::run(&mut self.store, &self.translator, id, values) {
            Ok(result) => {
                self.after_write()?;
                Ok(result)
            }
            Err(err @ RosterError::EmployeeNotFound(_)) => {
                self.router.go(Route::List);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Marks `id` for deletion and opens the confirmation dialog for it.
    pub fn request_delete(&mut self, id: &str) -> Result<&ConfirmDialog> {
        self.list.load(self.store.get_all()?);
        if !self.list.request_delete(id) {
            return Err(RosterError::EmployeeNotFound(id.to_string()));
        }
        let subject = self
            .list
            .pending_delete()
            .map(|employee| employee.full_name())
            .unwrap_or_default();
        self.dialog = ConfirmDialog::delete_prompt(&self.translator, &subject);
        Ok(&self.dialog)
    }

    /// Settles the pending delete. Cancelling leaves the store untouched.
    pub fn resolve_delete(&mut self, outcome: DialogOutcome) -> Result<commands::CmdResult> {
        match outcome {
            DialogOutcome::Confirmed => self.dialog.confirm(),
            DialogOutcome::Cancelled => self.dialog.cancel(),
        };
        let id = self
            .list
            .pending_delete()
            .map(|employee| employee.id.clone())
            .ok_or_else(|| RosterError::Api("No delete is pending".to_string()))?;

        match outcome {
            DialogOutcome::Confirmed => {
                self.list.take_pending_delete();
                let result = commands::delete::run(&mut self.store, &self.translator, &id)?;
                self.after_write()?;
                Ok(result)
            }
            DialogOutcome::Cancelled => {
                self.list.cancel_delete();
                tracing::debug!(id = %id, "delete cancelled");
                let mut result = commands::CmdResult::default();
                result.add_message(commands::CmdMessage::info(
                    self.translator.translate("deleteCancelled"),
                ));
                Ok(result)
            }
        }
    }

    /// Settles the pending delete from a typed yes/no answer.
    pub fn answer_delete(&mut self, input: &str) -> Result<commands::CmdResult> {
        let outcome = self.dialog.answer(input);
        self.resolve_delete(outcome)
    }

    pub fn set_language(&mut self, code: Option<&str>) -> Result<commands::CmdResult> {
        let result = commands::language::run(&self.paths, &mut self.translator, code)?;
        self.dialog.relabel(&self.translator);
        Ok(result)
    }

    pub fn seed(&mut self, count: usize, seed: u64) -> Result<commands::CmdResult> {
        let result = commands::seed::run(&mut self.store, count, seed)?;
        self.after_write()?;
        Ok(result)
    }

    pub fn format_phone(&self, input: &str) -> String {
        phone::format_phone(input)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn list_state(&self) -> &ListState {
        &self.list
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn dialog(&self) -> &ConfirmDialog {
        &self.dialog
    }

    pub fn paths(&self) -> &commands::RosterPaths {
        &self.paths
    }

    fn after_write(&mut self) -> Result<()> {
        self.list.load(self.store.get_all()?);
        self.router.go(Route::List);
        Ok(())
    }
}

pub use commands::list::ListRequest;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PageSummary, RosterPaths};
