//! Networking modules for the payroll REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `error` classifies failures, and `types`
//! defines the wire schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
