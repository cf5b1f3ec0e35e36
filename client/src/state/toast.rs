//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Every API outcome a user should know about goes through here; pages never
//! swallow a failure silently. The queue is bounded so a burst of failures
//! cannot grow it without limit.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum toasts kept on screen; older ones are dropped first.
pub const MAX_TOASTS: usize = 5;

/// How long a toast stays up before auto-dismissing.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// CSS modifier for the toast element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Queue a toast on the shared signal and schedule its auto-dismiss.
pub fn notify(toasts: leptos::prelude::RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    use leptos::prelude::Update;

    let mut id = 0;
    let message = message.into();
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
