//! Shared application state provided via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `auth` holds the session snapshot, `session` owns every mutation of it,
//! `ui` keeps presentation chrome out of domain state.

pub mod auth;
pub mod session;
pub mod ui;
