//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `dashboard`, `admin`, etc.) so
//! individual pages can depend on small focused models. Everything here is
//! plain data with pure methods; pages wrap it in signals.

pub mod admin;
pub mod dashboard;
pub mod forms;
pub mod session;
pub mod submit;
pub mod toast;
