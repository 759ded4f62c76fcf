//! Admin session gate.
//!
//! # Responsibility
//! - Persist the admin session in browser-style key/value storage.
//! - Expose an explicit load / expire / clear lifecycle.

pub mod admin;
pub mod storage;
