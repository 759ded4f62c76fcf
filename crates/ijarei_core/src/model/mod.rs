//! Journal domain model.
//!
//! # Responsibility
//! - Define the archive hierarchy and article records shared by archive
//!   state, filtering and data services.
//!
//! # Invariants
//! - Every entity carries a stable string id assigned by its data source.

pub mod archive;
