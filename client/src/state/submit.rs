//! In-flight tracking for form submissions.
//!
//! A form holds one gate. `try_begin` succeeds only when nothing is
//! outstanding, so a second click while the first request is pending is a
//! no-op instead of a duplicate backend write.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitGate {
    in_flight: bool,
}

impl SubmitGate {
    /// Claim the gate. Returns `false` when a submission is already pending.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_busy(self) -> bool {
        self.in_flight
    }
}

/// Claim a gate held in a signal.
pub fn begin_submit(gate: RwSignal<SubmitGate>) -> bool {
    let mut started = false;
    gate.update(|g| started = g.try_begin());
    started
}
