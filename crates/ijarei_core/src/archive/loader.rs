//! Archive load sequencing.
//!
//! # Responsibility
//! - Fetch the volume skeleton, then every part's articles, one at a time.
//! - Publish results and failures into the archive store.
//!
//! # Invariants
//! - Part fetches are awaited sequentially in tree order.
//! - A failed part is logged and skipped; articles of other parts are kept.
//! - A failed skeleton fetch sets the store error and stops loading.
//! - `loading` is `false` whenever `load_archive` returns.

use crate::archive::state::ArchiveAction;
use crate::archive::store::ArchiveStore;
use crate::model::archive::{ArchiveArticle, Volume};
use crate::service::archive_source::{ArchiveSource, ArchiveSourceError};
use log::{error, info, warn};
use std::time::Instant;

/// User-facing message shown with the "Try Again" action.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load archive data. Please try again.";

/// Counters reported by one archive load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub volumes: usize,
    pub parts: usize,
    pub articles: usize,
    pub failed_parts: usize,
}

/// Loads the archive into `store`.
///
/// # Errors
/// - Returns the skeleton fetch error after publishing
///   [`LOAD_ERROR_MESSAGE`] to the store. Part failures are not errors.
pub async fn load_archive(
    source: &dyn ArchiveSource,
    store: &mut ArchiveStore,
) -> Result<LoadSummary, ArchiveSourceError> {
    let started_at = Instant::now();
    info!("event=archive_load module=archive status=start");

    store.dispatch(ArchiveAction::SetLoading(true));
    store.dispatch(ArchiveAction::SetError(None));

    let volumes = match source.fetch_volumes().await {
        Ok(volumes) => volumes,
        Err(err) => {
            error!(
                "event=archive_load module=archive status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            store.dispatch(ArchiveAction::SetError(Some(LOAD_ERROR_MESSAGE.to_string())));
            store.dispatch(ArchiveAction::SetLoading(false));
            return Err(err);
        }
    };

    store.dispatch(ArchiveAction::SetVolumes(volumes.clone()));

    let (articles, mut summary) = collect_articles(source, &volumes).await;
    summary.volumes = volumes.len();
    summary.articles = articles.len();

    store.dispatch(ArchiveAction::SetAllArticles(articles));
    store.dispatch(ArchiveAction::SetLoading(false));

    info!(
        "event=archive_load module=archive status=ok duration_ms={} volumes={} parts={} articles={} failed_parts={}",
        started_at.elapsed().as_millis(),
        summary.volumes,
        summary.parts,
        summary.articles,
        summary.failed_parts
    );

    Ok(summary)
}

async fn collect_articles(
    source: &dyn ArchiveSource,
    volumes: &[Volume],
) -> (Vec<ArchiveArticle>, LoadSummary) {
    let mut articles = Vec::new();
    let mut summary = LoadSummary::default();

    for volume in volumes {
        for issue in &volume.issues {
            for part in &issue.parts {
                summary.parts += 1;
                match source.fetch_articles(volume, issue, part).await {
                    Ok(fetched) => articles.extend(
                        fetched
                            .into_iter()
                            .map(|article| ArchiveArticle::new(article, volume, issue, part)),
                    ),
                    Err(err) => {
                        summary.failed_parts += 1;
                        warn!(
                            "event=archive_part_fetch module=archive status=skipped part_id={} error={}",
                            part.id, err
                        );
                    }
                }
            }
        }
    }

    (articles, summary)
}
