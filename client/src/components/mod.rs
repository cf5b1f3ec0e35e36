//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (navbar, toasts) and data widgets (charts,
//! KPI cards) while reading shared state from Leptos context providers.

pub mod bar_chart;
pub mod kpi_card;
pub mod navbar;
pub mod toast_host;
