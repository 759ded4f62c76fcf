//! Core logic for the IJAREI journal site.
//! Page-facing state machines, services and validation live here; the
//! binary crate only wires them to a terminal.

pub mod api;
pub mod archive;
pub mod config;
pub mod context;
pub mod db;
pub mod forms;
pub mod logging;
pub mod model;
pub mod routing;
pub mod service;
pub mod session;

pub use api::{ApiClient, ApiClientError};
pub use archive::browser::{ArchiveBrowser, DownloadError, DownloadReceipt, DownloadTicket};
pub use archive::filter::{filter_volumes, search_articles};
pub use archive::loader::{load_archive, LoadSummary, LOAD_ERROR_MESSAGE};
pub use archive::state::{reduce, ArchiveAction, ArchiveState};
pub use archive::store::ArchiveStore;
pub use config::{ApiClientConfig, ConfigError, SiteConfig};
pub use context::AppContext;
pub use forms::submit::{
    submit_form, FormError, FormSubmitter, FormSuccess, MockSubmitter, SubmitError, SubmitReceipt,
};
pub use forms::{FieldErrors, FileAttachment, FormModel, FormPayload};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::archive::{
    available_years, ArchiveArticle, Article, ArticleId, BranchKey, Issue, IssueId, Part, PartId,
    Volume, VolumeId, YearFilter,
};
pub use routing::routes::{resolve, AdminPage, Page, RouteDecision};
pub use service::archive_source::{ArchiveSource, ArchiveSourceError, MockArchiveSource};
pub use session::admin::{now_epoch_ms, AdminSession, SessionError, SessionManager, SessionState};
pub use session::storage::{MemoryStorage, SessionStorage, SqliteStorage, StorageError};
