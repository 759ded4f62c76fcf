//! Client-side routing of the journal site.
//!
//! # Responsibility
//! - Map URL paths to public pages and admin panel sections.
//! - Gate the admin panel behind the admin session.

pub mod routes;
