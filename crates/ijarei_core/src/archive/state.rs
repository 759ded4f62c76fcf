//! Archive page state and reducer.
//!
//! # Responsibility
//! - Hold everything the Archive page renders: tree, flat articles, expand
//!   sets, filters, modal and download tracking.
//! - Apply typed actions as pure state transitions.
//!
//! # Invariants
//! - `reduce` never mutates its input; every action yields a new state.
//! - Set-valued fields are rebuilt on change so equality checks on the old
//!   and new state observe the transition.
//! - Ids are not validated. Toggling an unknown id adds it to the set.

use crate::model::archive::{ArchiveArticle, IssueId, PartId, Volume, VolumeId, YearFilter};
use std::collections::BTreeSet;

/// Complete Archive page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveState {
    pub volumes: Vec<Volume>,
    pub filtered_volumes: Vec<Volume>,
    pub all_articles: Vec<ArchiveArticle>,
    pub loading: bool,
    /// User-facing load error. `Some` enables the retry action.
    pub error: Option<String>,
    pub expanded_volumes: BTreeSet<VolumeId>,
    pub expanded_issues: BTreeSet<IssueId>,
    pub expanded_parts: BTreeSet<PartId>,
    pub search_term: String,
    pub selected_year: YearFilter,
    pub selected_article: Option<ArchiveArticle>,
    pub modal_open: bool,
    /// Composite `volume-issue-article` keys of in-flight downloads.
    pub downloading_articles: BTreeSet<String>,
}

impl Default for ArchiveState {
    /// Page state at mount time: loading, nothing expanded, no filters.
    fn default() -> Self {
        Self {
            volumes: Vec::new(),
            filtered_volumes: Vec::new(),
            all_articles: Vec::new(),
            loading: true,
            error: None,
            expanded_volumes: BTreeSet::new(),
            expanded_issues: BTreeSet::new(),
            expanded_parts: BTreeSet::new(),
            search_term: String::new(),
            selected_year: YearFilter::All,
            selected_article: None,
            modal_open: false,
            downloading_articles: BTreeSet::new(),
        }
    }
}

impl ArchiveState {
    pub fn is_volume_expanded(&self, id: &str) -> bool {
        self.expanded_volumes.contains(id)
    }

    pub fn is_issue_expanded(&self, id: &str) -> bool {
        self.expanded_issues.contains(id)
    }

    pub fn is_part_expanded(&self, id: &str) -> bool {
        self.expanded_parts.contains(id)
    }

    pub fn is_downloading(&self, key: &str) -> bool {
        self.downloading_articles.contains(key)
    }

    /// Returns whether a search term or year filter is active.
    ///
    /// Distinguishes "no results" from "no filters applied".
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.trim().is_empty() || self.selected_year != YearFilter::All
    }
}

/// Archive state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveAction {
    SetLoading(bool),
    SetError(Option<String>),
    SetVolumes(Vec<Volume>),
    SetFilteredVolumes(Vec<Volume>),
    SetAllArticles(Vec<ArchiveArticle>),
    ToggleVolume(VolumeId),
    ToggleIssue(IssueId),
    TogglePart(PartId),
    SetSearchTerm(String),
    SetSelectedYear(YearFilter),
    SetSelectedArticle(Option<ArchiveArticle>),
    SetModalOpen(bool),
    AddDownloadingArticle(String),
    RemoveDownloadingArticle(String),
}

impl ArchiveAction {
    /// Stable snake_case action name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetLoading(_) => "set_loading",
            Self::SetError(_) => "set_error",
            Self::SetVolumes(_) => "set_volumes",
            Self::SetFilteredVolumes(_) => "set_filtered_volumes",
            Self::SetAllArticles(_) => "set_all_articles",
            Self::ToggleVolume(_) => "toggle_volume",
            Self::ToggleIssue(_) => "toggle_issue",
            Self::TogglePart(_) => "toggle_part",
            Self::SetSearchTerm(_) => "set_search_term",
            Self::SetSelectedYear(_) => "set_selected_year",
            Self::SetSelectedArticle(_) => "set_selected_article",
            Self::SetModalOpen(_) => "set_modal_open",
            Self::AddDownloadingArticle(_) => "add_downloading_article",
            Self::RemoveDownloadingArticle(_) => "remove_downloading_article",
        }
    }

    /// Returns whether applying this action invalidates `filtered_volumes`.
    pub fn affects_filter(&self) -> bool {
        matches!(
            self,
            Self::SetVolumes(_)
                | Self::SetAllArticles(_)
                | Self::SetSearchTerm(_)
                | Self::SetSelectedYear(_)
        )
    }
}

/// Applies one action and returns the next state.
pub fn reduce(state: &ArchiveState, action: ArchiveAction) -> ArchiveState {
    let mut next = state.clone();

    match action {
        ArchiveAction::SetLoading(loading) => next.loading = loading,
        ArchiveAction::SetError(error) => next.error = error,
        ArchiveAction::SetVolumes(volumes) => next.volumes = volumes,
        ArchiveAction::SetFilteredVolumes(volumes) => next.filtered_volumes = volumes,
        ArchiveAction::SetAllArticles(articles) => next.all_articles = articles,
        ArchiveAction::ToggleVolume(id) => {
            next.expanded_volumes = toggled(&state.expanded_volumes, id);
        }
        ArchiveAction::ToggleIssue(id) => {
            next.expanded_issues = toggled(&state.expanded_issues, id);
        }
        ArchiveAction::TogglePart(id) => {
            next.expanded_parts = toggled(&state.expanded_parts, id);
        }
        ArchiveAction::SetSearchTerm(term) => next.search_term = term,
        ArchiveAction::SetSelectedYear(year) => next.selected_year = year,
        ArchiveAction::SetSelectedArticle(article) => next.selected_article = article,
        ArchiveAction::SetModalOpen(open) => next.modal_open = open,
        ArchiveAction::AddDownloadingArticle(key) => {
            let mut keys = state.downloading_articles.clone();
            keys.insert(key);
            next.downloading_articles = keys;
        }
        ArchiveAction::RemoveDownloadingArticle(key) => {
            let mut keys = state.downloading_articles.clone();
            keys.remove(&key);
            next.downloading_articles = keys;
        }
    }

    next
}

fn toggled(set: &BTreeSet<String>, id: String) -> BTreeSet<String> {
    let mut next = set.clone();
    if !next.remove(&id) {
        next.insert(id);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::{reduce, ArchiveAction, ArchiveState};
    use crate::model::archive::YearFilter;

    #[test]
    fn default_state_starts_loading_without_filters() {
        let state = ArchiveState::default();
        assert!(state.loading);
        assert!(!state.has_active_filters());
        assert_eq!(state.selected_year, YearFilter::All);
    }

    #[test]
    fn reduce_leaves_input_state_untouched() {
        let state = ArchiveState::default();
        let next = reduce(&state, ArchiveAction::ToggleVolume("vol-1".to_string()));

        assert!(state.expanded_volumes.is_empty());
        assert!(next.is_volume_expanded("vol-1"));
    }

    #[test]
    fn whitespace_search_term_is_not_an_active_filter() {
        let state = reduce(
            &ArchiveState::default(),
            ArchiveAction::SetSearchTerm("   ".to_string()),
        );
        assert!(!state.has_active_filters());
    }
}
