//! Transient user notifications (toasts).

pub const AUTO_DISMISS_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub const MAX_VISIBLE: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast; the oldest is dropped beyond [`Self::MAX_VISIBLE`].
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > Self::MAX_VISIBLE {
            self.toasts.remove(0);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastKind::Success, "Added to wishlist");
        let b = queue.push(ToastKind::Error, "Wishlist update failed");
        assert_ne!(a, b);
        assert_eq!(queue.toasts().len(), 2);

        queue.dismiss(a);
        assert_eq!(queue.toasts()[0].message, "Wishlist update failed");
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn oldest_dropped_when_full() {
        let mut queue = ToastQueue::new();
        for i in 0..7 {
            queue.push(ToastKind::Success, format!("toast {i}"));
        }
        assert_eq!(queue.toasts().len(), ToastQueue::MAX_VISIBLE);
        assert_eq!(queue.toasts()[0].message, "toast 2");
    }
}
