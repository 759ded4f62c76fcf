use ijarei_core::service::mock_catalog::sample_catalog;
use ijarei_core::{reduce, ArchiveAction, ArchiveState, ArchiveStore, YearFilter};

#[test]
fn toggling_twice_restores_membership() {
    let state = ArchiveState::default();

    let once = reduce(&state, ArchiveAction::ToggleIssue("vol-1-iss-2".to_string()));
    assert!(once.is_issue_expanded("vol-1-iss-2"));

    let twice = reduce(&once, ArchiveAction::ToggleIssue("vol-1-iss-2".to_string()));
    assert!(!twice.is_issue_expanded("vol-1-iss-2"));
    assert_eq!(twice.expanded_issues, state.expanded_issues);
}

#[test]
fn toggles_do_not_validate_ids() {
    let state = reduce(
        &ArchiveState::default(),
        ArchiveAction::TogglePart("no-such-part".to_string()),
    );
    assert!(state.is_part_expanded("no-such-part"));
}

#[test]
fn expand_sets_are_independent() {
    let state = reduce(
        &ArchiveState::default(),
        ArchiveAction::ToggleVolume("vol-1".to_string()),
    );
    assert!(state.is_volume_expanded("vol-1"));
    assert!(!state.is_issue_expanded("vol-1"));
    assert!(!state.is_part_expanded("vol-1"));
}

#[test]
fn downloading_keys_are_added_and_removed() {
    let state = reduce(
        &ArchiveState::default(),
        ArchiveAction::AddDownloadingArticle("2-1-ijarei-2024-002".to_string()),
    );
    assert!(state.is_downloading("2-1-ijarei-2024-002"));

    let state = reduce(
        &state,
        ArchiveAction::RemoveDownloadingArticle("2-1-ijarei-2024-002".to_string()),
    );
    assert!(state.downloading_articles.is_empty());

    let state = reduce(
        &state,
        ArchiveAction::RemoveDownloadingArticle("missing".to_string()),
    );
    assert!(state.downloading_articles.is_empty());
}

#[test]
fn error_and_loading_are_plain_assignments() {
    let state = reduce(
        &ArchiveState::default(),
        ArchiveAction::SetError(Some("boom".to_string())),
    );
    let state = reduce(&state, ArchiveAction::SetLoading(false));

    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(!state.loading);
}

#[test]
fn store_refilters_after_filter_inputs_change() {
    let catalog = sample_catalog();
    let mut store = ArchiveStore::new();

    store.dispatch(ArchiveAction::SetVolumes(catalog.volumes.clone()));
    assert_eq!(store.state().filtered_volumes, catalog.volumes);

    store.dispatch(ArchiveAction::SetSelectedYear(YearFilter::Year(2025)));
    assert_eq!(store.state().filtered_volumes.len(), 1);
    assert_eq!(store.state().filtered_volumes[0].year, 2025);
    assert!(store.state().has_active_filters());

    store.dispatch(ArchiveAction::SetSelectedYear(YearFilter::All));
    assert_eq!(store.state().filtered_volumes.len(), 3);
}

#[test]
fn store_keeps_filtered_tree_on_unrelated_actions() {
    let catalog = sample_catalog();
    let mut store = ArchiveStore::new();
    store.dispatch(ArchiveAction::SetVolumes(catalog.volumes.clone()));
    store.dispatch(ArchiveAction::SetSearchTerm("nothing matches this".to_string()));
    assert!(store.state().filtered_volumes.is_empty());

    store.dispatch(ArchiveAction::ToggleVolume("vol-1".to_string()));
    store.dispatch(ArchiveAction::SetModalOpen(true));
    assert!(store.state().filtered_volumes.is_empty());
}
