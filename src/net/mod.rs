//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport (bearer injection, envelope decoding, timeout),
//! `auth` and `admin` are the typed endpoint surfaces, `types` the wire
//! schema, `error` the failure classification the session layer acts on.

pub mod admin;
pub mod api;
pub mod auth;
pub mod error;
pub mod types;
