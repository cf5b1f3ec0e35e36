//! Mount liveness for async page work.
//!
//! SYSTEM CONTEXT
//! ==============
//! A request started by a page may finish after the user has navigated away.
//! Tasks check the page's guard before writing results, and a retired guard
//! means the response is dropped.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl MountGuard {
    /// Guard retired automatically when the current reactive owner is cleaned up.
    pub fn for_current_owner() -> Self {
        let guard = Self::default();
        let retire = guard.clone();
        leptos::prelude::on_cleanup(move || retire.retire());
        guard
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn retire(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
