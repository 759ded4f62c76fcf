//! Archive page controller.
//!
//! # Responsibility
//! - Drive load/retry, filters and expand toggles against the archive store.
//! - Lazily fetch a part's articles the first time it is expanded.
//! - Manage the article detail modal and simulated PDF downloads.
//!
//! # Invariants
//! - The lazy part cache is owned by the browser, not by `ArchiveState`, and
//!   lives as long as the browser.
//! - A part is fetched at most once while its cache entry exists.
//! - One download per composite key may be in flight at a time.

use crate::archive::loader::{load_archive, LoadSummary};
use crate::archive::state::{ArchiveAction, ArchiveState};
use crate::archive::store::ArchiveStore;
use crate::model::archive::{
    ArchiveArticle, Article, ArticleId, Issue, Part, PartId, Volume, YearFilter,
};
use crate::service::archive_source::{ArchiveSource, ArchiveSourceError};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

static NON_FILE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid file name regex"));

const MAX_FILE_STEM_CHARS: usize = 80;

/// Errors from the simulated download flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    /// Article id is not part of the loaded archive.
    ArticleNotFound(ArticleId),
    /// A download with the same composite key is still in flight.
    AlreadyDownloading(String),
}

impl Display for DownloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::AlreadyDownloading(key) => write!(f, "download already in progress: {key}"),
        }
    }
}

impl Error for DownloadError {}

/// Result of one completed simulated download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReceipt {
    pub article_id: ArticleId,
    pub file_name: String,
    pub url: Option<String>,
}

/// Handle of an in-flight download; pass back to `finish_download`.
#[derive(Debug)]
pub struct DownloadTicket {
    key: String,
    receipt: DownloadReceipt,
}

impl DownloadTicket {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Archive page controller over a store and a data source.
pub struct ArchiveBrowser {
    store: ArchiveStore,
    source: Arc<dyn ArchiveSource>,
    part_articles: HashMap<PartId, Vec<Article>>,
    download_delay: Duration,
}

impl ArchiveBrowser {
    pub fn new(source: Arc<dyn ArchiveSource>, download_delay: Duration) -> Self {
        Self {
            store: ArchiveStore::new(),
            source,
            part_articles: HashMap::new(),
            download_delay,
        }
    }

    pub fn state(&self) -> &ArchiveState {
        self.store.state()
    }

    /// Runs the mount-time archive load.
    pub async fn load(&mut self) -> Result<LoadSummary, ArchiveSourceError> {
        load_archive(self.source.as_ref(), &mut self.store).await
    }

    /// "Try Again" action after a failed load.
    pub async fn retry(&mut self) -> Result<LoadSummary, ArchiveSourceError> {
        info!("event=archive_retry module=archive status=start");
        self.load().await
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.store.dispatch(ArchiveAction::SetSearchTerm(term.into()));
    }

    pub fn set_selected_year(&mut self, year: YearFilter) {
        self.store.dispatch(ArchiveAction::SetSelectedYear(year));
    }

    /// Clears both search term and year filter.
    pub fn clear_filters(&mut self) {
        self.store.dispatch(ArchiveAction::SetSearchTerm(String::new()));
        self.store.dispatch(ArchiveAction::SetSelectedYear(YearFilter::All));
    }

    /// Toggles a volume; returns whether it is now expanded.
    pub fn toggle_volume(&mut self, volume_id: &str) -> bool {
        self.store
            .dispatch(ArchiveAction::ToggleVolume(volume_id.to_string()));
        self.state().is_volume_expanded(volume_id)
    }

    /// Toggles an issue; returns whether it is now expanded.
    pub fn toggle_issue(&mut self, issue_id: &str) -> bool {
        self.store
            .dispatch(ArchiveAction::ToggleIssue(issue_id.to_string()));
        self.state().is_issue_expanded(issue_id)
    }

    /// Toggles a part; returns whether it is now expanded.
    ///
    /// The first expansion fetches the part's articles into the local cache.
    pub async fn toggle_part(&mut self, part_id: &str) -> bool {
        self.store
            .dispatch(ArchiveAction::TogglePart(part_id.to_string()));
        let expanded = self.state().is_part_expanded(part_id);

        if expanded && !self.part_articles.contains_key(part_id) {
            self.fetch_part_articles(part_id).await;
        }

        expanded
    }

    /// Returns cached articles of an expanded-at-least-once part.
    pub fn part_articles(&self, part_id: &str) -> Option<&[Article]> {
        self.part_articles.get(part_id).map(Vec::as_slice)
    }

    /// Selects an article from the loaded archive and opens the modal.
    ///
    /// Returns `false` and leaves state unchanged when the id is unknown.
    pub fn open_article(&mut self, article_id: &str) -> bool {
        let Some(article) = self.find_article(article_id).cloned() else {
            return false;
        };

        self.store
            .dispatch(ArchiveAction::SetSelectedArticle(Some(article)));
        self.store.dispatch(ArchiveAction::SetModalOpen(true));
        true
    }

    /// Closes the modal and clears the selection.
    pub fn close_article(&mut self) {
        self.store.dispatch(ArchiveAction::SetModalOpen(false));
        self.store.dispatch(ArchiveAction::SetSelectedArticle(None));
    }

    /// Marks an article download as in flight.
    ///
    /// # Errors
    /// - `ArticleNotFound` when the id is not loaded.
    /// - `AlreadyDownloading` when the same key is still in flight.
    pub fn begin_download(&mut self, article_id: &str) -> Result<DownloadTicket, DownloadError> {
        let article = self
            .find_article(article_id)
            .ok_or_else(|| DownloadError::ArticleNotFound(article_id.to_string()))?;

        let key = article.download_key();
        if self.state().is_downloading(&key) {
            return Err(DownloadError::AlreadyDownloading(key));
        }

        let receipt = DownloadReceipt {
            article_id: article.article.id.clone(),
            file_name: download_file_name(&article.article.title),
            url: article.article.pdf_url.clone(),
        };

        self.store
            .dispatch(ArchiveAction::AddDownloadingArticle(key.clone()));
        debug!("event=article_download module=archive status=start key={key}");

        Ok(DownloadTicket { key, receipt })
    }

    /// Clears the in-flight marker and yields the receipt.
    pub fn finish_download(&mut self, ticket: DownloadTicket) -> DownloadReceipt {
        self.store
            .dispatch(ArchiveAction::RemoveDownloadingArticle(ticket.key.clone()));
        info!(
            "event=article_download module=archive status=ok key={} file_name={}",
            ticket.key, ticket.receipt.file_name
        );
        ticket.receipt
    }

    /// Runs one simulated download end to end.
    pub async fn download_article(
        &mut self,
        article_id: &str,
    ) -> Result<DownloadReceipt, DownloadError> {
        let ticket = self.begin_download(article_id)?;
        if !self.download_delay.is_zero() {
            tokio::time::sleep(self.download_delay).await;
        }
        Ok(self.finish_download(ticket))
    }

    fn find_article(&self, article_id: &str) -> Option<&ArchiveArticle> {
        self.state()
            .all_articles
            .iter()
            .find(|article| article.article.id == article_id)
    }

    async fn fetch_part_articles(&mut self, part_id: &str) {
        let Some((volume, issue, part)) = locate_part(&self.state().volumes, part_id) else {
            debug!("event=part_expand module=archive status=skipped reason=unknown_part part_id={part_id}");
            return;
        };

        match self.source.fetch_articles(&volume, &issue, &part).await {
            Ok(articles) => {
                debug!(
                    "event=part_expand module=archive status=ok part_id={} articles={}",
                    part_id,
                    articles.len()
                );
                self.part_articles.insert(part.id, articles);
            }
            Err(err) => {
                warn!(
                    "event=part_expand module=archive status=error part_id={part_id} error={err}"
                );
            }
        }
    }
}

fn locate_part(volumes: &[Volume], part_id: &str) -> Option<(Volume, Issue, Part)> {
    volumes.iter().find_map(|volume| {
        volume.issues.iter().find_map(|issue| {
            issue
                .parts
                .iter()
                .find(|part| part.id == part_id)
                .map(|part| (volume.clone(), issue.clone(), part.clone()))
        })
    })
}

fn download_file_name(title: &str) -> String {
    let lowered = title.to_lowercase();
    let slug = NON_FILE_CHARS_RE.replace_all(&lowered, "-");
    let stem = slug
        .trim_matches('-')
        .chars()
        .take(MAX_FILE_STEM_CHARS)
        .collect::<String>();
    let stem = stem.trim_end_matches('-');

    if stem.is_empty() {
        return "article.pdf".to_string();
    }
    format!("{stem}.pdf")
}

#[cfg(test)]
mod tests {
    use super::download_file_name;

    #[test]
    fn download_file_name_slugifies_title() {
        assert_eq!(
            download_file_name("Federated Learning: A Survey (2024)"),
            "federated-learning-a-survey-2024.pdf"
        );
    }

    #[test]
    fn download_file_name_falls_back_for_symbol_titles() {
        assert_eq!(download_file_name("!!!"), "article.pdf");
    }
}
