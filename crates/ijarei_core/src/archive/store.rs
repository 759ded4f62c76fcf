//! Archive state container.
//!
//! # Responsibility
//! - Own the current `ArchiveState` and funnel every change through `reduce`.
//! - Re-derive `filtered_volumes` after actions that invalidate it.
//!
//! # Invariants
//! - `filtered_volumes` always equals `filter_volumes` applied to the
//!   current tree, articles, search term and year after any dispatch that
//!   touched one of those inputs.

use crate::archive::filter::filter_volumes;
use crate::archive::state::{reduce, ArchiveAction, ArchiveState};
use log::debug;

/// Single-owner store for Archive page state.
#[derive(Debug, Default)]
pub struct ArchiveStore {
    state: ArchiveState,
}

impl ArchiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store around an existing state snapshot.
    pub fn with_state(state: ArchiveState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ArchiveState {
        &self.state
    }

    /// Applies one action, then refreshes the filtered tree when needed.
    pub fn dispatch(&mut self, action: ArchiveAction) {
        let refilter = action.affects_filter();
        debug!(
            "event=archive_dispatch module=archive action={}",
            action.name()
        );
        self.state = reduce(&self.state, action);

        if refilter {
            let filtered = filter_volumes(
                &self.state.volumes,
                &self.state.all_articles,
                &self.state.search_term,
                self.state.selected_year,
            );
            self.state = reduce(&self.state, ArchiveAction::SetFilteredVolumes(filtered));
        }
    }
}
