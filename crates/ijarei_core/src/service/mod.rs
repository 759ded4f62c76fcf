//! Data services behind the archive page.
//!
//! # Responsibility
//! - Define the archive data seam consumed by the loader and browser.
//! - Provide the simulated-latency mock implementation and its catalog.

pub mod archive_source;
pub mod mock_catalog;
