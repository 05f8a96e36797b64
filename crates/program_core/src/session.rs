use shared::domain::{Program, ProgramId, SortField};
use tracing::{debug, info};

use crate::{
    error::SessionError, form::ProgramForm, program_store::ProgramStore, seed,
    sort::SortState, subscription::SubscriptionSummary,
};

/// Everything one admin screen owns: the program table, the subscription
/// banner and, while the dialog is open, the create-program form.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    programs: ProgramStore,
    form: Option<ProgramForm>,
    subscription: SubscriptionSummary,
}

impl AdminSession {
    pub fn new(programs: ProgramStore, subscription: SubscriptionSummary) -> Self {
        Self {
            programs,
            form: None,
            subscription,
        }
    }

    pub fn with_demo_data() -> Self {
        Self::new(
            ProgramStore::with_programs(seed::demo_programs()),
            SubscriptionSummary::default(),
        )
    }

    pub fn programs(&self) -> &ProgramStore {
        &self.programs
    }

    pub fn subscription(&self) -> &SubscriptionSummary {
        &self.subscription
    }

    pub fn list(&self) -> Vec<&Program> {
        self.programs.view()
    }

    pub fn sort_by(&mut self, field: SortField) -> SortState {
        self.programs.set_sort(field)
    }

    pub fn delete_program(&mut self, program_id: &ProgramId) -> bool {
        self.programs.remove(program_id)
    }

    pub fn view_program(&self, program_id: &ProgramId) -> Option<&Program> {
        self.programs.get(program_id)
    }

    /// Editing is not supported yet; this only records the request and
    /// reports whether the program exists.
    pub fn edit_program(&self, program_id: &ProgramId) -> bool {
        info!(%program_id, "edit program requested");
        self.programs.get(program_id).is_some()
    }

    /// Opens the create-program dialog, reusing a form that is already open.
    pub fn open_form(&mut self) -> &mut ProgramForm {
        self.form.get_or_insert_with(|| {
            debug!("create-program form opened");
            ProgramForm::new()
        })
    }

    pub fn form(&self) -> Option<&ProgramForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Result<&mut ProgramForm, SessionError> {
        self.form.as_mut().ok_or(SessionError::NoOpenForm)
    }

    /// Closes the dialog without submitting. Returns how many collected
    /// assets were discarded.
    pub fn cancel_form(&mut self) -> usize {
        let discarded = self.form.take().map_or(0, |form| form.assets().len());
        debug!(discarded, "create-program form cancelled");
        discarded
    }

    /// Submits the open form. On success the program is in the table and the
    /// dialog is closed; on failure the dialog stays open as it was.
    pub fn submit_form(&mut self) -> Result<Program, SessionError> {
        let form = self.form.as_mut().ok_or(SessionError::NoOpenForm)?;
        let program = form.submit(&mut self.programs)?;
        self.form = None;
        Ok(program)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
