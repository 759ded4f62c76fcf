//! Archive search and year filtering.
//!
//! # Responsibility
//! - Derive the visible (pruned) volume tree from the full tree, the flat
//!   article list, the search term and the selected year.
//!
//! # Invariants
//! - Year filtering runs before search.
//! - A blank search term returns the year-filtered tree unchanged.
//! - A search with zero hits returns an empty tree, whatever the year.
//! - Hits map back to the tree only through `(volume_number, issue_number,
//!   part_name)`; an article whose ancestors do not exist in the tree is
//!   dropped from the filtered view.

use crate::model::archive::{ArchiveArticle, BranchKey, Issue, Volume, YearFilter};
use std::collections::BTreeSet;

/// Returns articles whose title or any author contains `search_term`,
/// case-insensitively. A blank term matches nothing.
pub fn search_articles<'a>(
    articles: &'a [ArchiveArticle],
    search_term: &str,
) -> Vec<&'a ArchiveArticle> {
    let needle = search_term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    articles
        .iter()
        .filter(|article| article.matches_lowercase(&needle))
        .collect()
}

/// Computes the filtered volume tree shown on the Archive page.
pub fn filter_volumes(
    volumes: &[Volume],
    articles: &[ArchiveArticle],
    search_term: &str,
    selected_year: YearFilter,
) -> Vec<Volume> {
    let year_filtered = volumes
        .iter()
        .filter(|volume| selected_year.admits(volume.year));

    if search_term.trim().is_empty() {
        return year_filtered.cloned().collect();
    }

    let branches = search_articles(articles, search_term)
        .into_iter()
        .map(ArchiveArticle::branch_key)
        .collect::<BTreeSet<_>>();

    if branches.is_empty() {
        return Vec::new();
    }

    year_filtered
        .filter_map(|volume| prune_volume(volume, &branches))
        .collect()
}

fn prune_volume(volume: &Volume, branches: &BTreeSet<BranchKey>) -> Option<Volume> {
    let issues = volume
        .issues
        .iter()
        .filter_map(|issue| prune_issue(volume.volume_number, issue, branches))
        .collect::<Vec<_>>();

    if issues.is_empty() {
        return None;
    }

    Some(Volume {
        issues,
        ..volume.clone()
    })
}

fn prune_issue(
    volume_number: u32,
    issue: &Issue,
    branches: &BTreeSet<BranchKey>,
) -> Option<Issue> {
    let parts = issue
        .parts
        .iter()
        .filter(|part| {
            branches.contains(&BranchKey {
                volume_number,
                issue_number: issue.issue_number,
                part_name: part.name.clone(),
            })
        })
        .cloned()
        .collect::<Vec<_>>();

    if parts.is_empty() {
        return None;
    }

    Some(Issue {
        parts,
        ..issue.clone()
    })
}
