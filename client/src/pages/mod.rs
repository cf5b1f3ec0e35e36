//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guarding, fetching, form
//! submission) and delegates rendering details to `components`.

pub mod admin;
pub mod dashboard;
pub mod login;
