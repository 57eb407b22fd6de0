//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (signals, fetches, dialogs) and
//! delegates shared rendering to `components`. Session mutations go through
//! `state::session` operations only.

pub mod admin;
pub mod change_password;
pub mod compliance;
pub mod forbidden;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod student;
pub mod teacher;
