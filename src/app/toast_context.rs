//! Toast notifications shared across pages.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::app::timer::sleep_ms;
use crate::state::notify::{Toast, ToastKind, ToastQueue, AUTO_DISMISS_MS};

#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: Signal<ToastQueue>,
}

impl ToastContext {
    /// Show a toast that dismisses itself after [`AUTO_DISMISS_MS`].
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let mut queue = self.queue;
        let id = queue.write().push(kind, message);
        // Root-scoped so the timer outlives the page that raised the toast
        spawn_forever(async move {
            sleep_ms(AUTO_DISMISS_MS).await;
            queue.write().dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }
}

/// Initialize toast context provider - call once at app root
pub fn use_toast_provider() {
    let queue = use_signal(ToastQueue::new);
    use_context_provider(|| ToastContext { queue });
}

/// Get toast context - use in any component
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
}
