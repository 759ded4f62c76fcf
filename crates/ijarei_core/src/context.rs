//! Application context shared by page controllers.
//!
//! # Responsibility
//! - Carry configuration and the admin session object explicitly.
//! - Build per-page services (archive browser, form submitters).
//!
//! # Invariants
//! - Route gating always consults a freshly loaded session, so an expired
//!   session is cleared before the admin panel is denied.

use crate::api::{ApiClient, ApiClientError};
use crate::archive::browser::ArchiveBrowser;
use crate::config::SiteConfig;
use crate::forms::manuscript::MultipartSubmitter;
use crate::forms::submit::MockSubmitter;
use crate::routing::routes::{resolve, RouteDecision};
use crate::service::archive_source::MockArchiveSource;
use crate::session::admin::SessionManager;
use crate::session::storage::{SessionStorage, StorageError};
use log::debug;
use std::sync::Arc;

pub struct AppContext<S: SessionStorage> {
    config: SiteConfig,
    session: SessionManager<S>,
}

impl<S: SessionStorage> AppContext<S> {
    pub fn new(config: SiteConfig, storage: S) -> Self {
        let session = SessionManager::with_ttl(storage, config.session_ttl_ms);
        Self { config, session }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn session(&mut self) -> &mut SessionManager<S> {
        &mut self.session
    }

    /// Resolves `path` against the current session state at `now_ms`.
    pub fn navigate(&mut self, path: &str, now_ms: i64) -> Result<RouteDecision, StorageError> {
        let authenticated = self.session.is_authenticated(now_ms)?;
        let decision = resolve(path, authenticated);
        debug!(
            "event=navigate module=routing path={} authenticated={} decision={:?}",
            path, authenticated, decision
        );
        Ok(decision)
    }

    /// Archive page controller over the mock archive service.
    pub fn archive_browser(&self) -> ArchiveBrowser {
        ArchiveBrowser::new(
            Arc::new(MockArchiveSource::new(self.config.mock_delay)),
            self.config.download_delay,
        )
    }

    /// Submitter used by the contact, login, signup and editorial forms.
    pub fn form_submitter(&self) -> MockSubmitter {
        MockSubmitter::new(self.config.mock_delay)
    }

    /// Multipart submitter used by the manuscript form.
    pub fn manuscript_submitter(&self) -> Result<MultipartSubmitter, ApiClientError> {
        let client = ApiClient::new(&self.config.api)?;
        Ok(MultipartSubmitter::new(
            self.config.manuscript_endpoint.clone(),
            client.http().clone(),
        ))
    }
}
