use shared::domain::{Program, ProgramId, SortField};
use tracing::{debug, info};

use crate::sort::{self, SortState};

/// Canonical program list. Stored order is newest first; sorting only
/// affects [`ProgramStore::view`].
#[derive(Debug, Clone, Default)]
pub struct ProgramStore {
    programs: Vec<Program>,
    sort: SortState,
}

impl ProgramStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_programs(programs: Vec<Program>) -> Self {
        Self {
            programs,
            sort: SortState::Unsorted,
        }
    }

    /// Prepends `program`. Identifier uniqueness is the caller's concern.
    pub fn add(&mut self, program: Program) {
        info!(program_id = %program.id, name = %program.name, "program added");
        self.programs.insert(0, program);
    }

    /// Removes the first program with `program_id`. Returns whether one was
    /// found; an unknown id is not an error.
    pub fn remove(&mut self, program_id: &ProgramId) -> bool {
        let Some(index) = self.programs.iter().position(|p| &p.id == program_id) else {
            debug!(%program_id, "delete ignored for unknown program");
            return false;
        };
        self.programs.remove(index);
        info!(%program_id, "program deleted");
        true
    }

    pub fn set_sort(&mut self, field: SortField) -> SortState {
        self.sort = self.sort.toggled_on(field);
        debug!(
            field = field.as_str(),
            direction = ?self.sort.direction(),
            "program sort changed"
        );
        self.sort
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Programs in display order, recomputed on every call.
    pub fn view(&self) -> Vec<&Program> {
        sort::sorted(&self.programs, self.sort)
    }

    /// Programs in stored order, ignoring the active sort.
    pub fn stored(&self) -> &[Program] {
        &self.programs
    }

    pub fn get(&self, program_id: &ProgramId) -> Option<&Program> {
        self.programs.iter().find(|p| &p.id == program_id)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/program_store_tests.rs"]
mod tests;
