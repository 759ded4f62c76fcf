//! Archive page engine.
//!
//! # Responsibility
//! - Hold Archive page state behind a typed reducer.
//! - Filter the volume tree by year and free-text search.
//! - Sequence archive loading and lazy per-part expansion.
//!
//! # Invariants
//! - All state changes go through `state::reduce`.

pub mod browser;
pub mod filter;
pub mod loader;
pub mod state;
pub mod store;
