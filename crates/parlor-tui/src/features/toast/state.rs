//! Toast feature state.

use std::time::{Duration, Instant};

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    created_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, title: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            created_at: Instant::now(),
        }
    }

    pub fn info(title: &str, description: &str) -> Self {
        Self::new(ToastKind::Info, title, description)
    }

    pub fn success(title: &str, description: &str) -> Self {
        Self::new(ToastKind::Success, title, description)
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self::new(ToastKind::Error, title, description)
    }
}

/// Toast stack with TTL-based expiry. Newest toast renders on top.
#[derive(Debug)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl ToastStack {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
        }
    }

    /// Pushes a toast onto the top of the stack.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.insert(0, toast);
    }

    /// Drops toasts older than the TTL. Called from the Tick reducer.
    pub fn expire(&mut self) {
        let ttl = self.ttl;
        self.toasts.retain(|t| t.created_at.elapsed() < ttl);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Toasts in render order, newest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A zero TTL expires toasts on the next tick.
    #[test]
    fn test_expire_drops_old_toasts() {
        let mut stack = ToastStack::new(Duration::ZERO);
        stack.push(Toast::error("Oops", "Something broke"));
        assert_eq!(stack.len(), 1);

        stack.expire();
        assert!(stack.is_empty());
    }

    /// Toasts inside the TTL survive expiry.
    #[test]
    fn test_expire_keeps_fresh_toasts() {
        let mut stack = ToastStack::new(Duration::from_secs(60));
        stack.push(Toast::info("Hello", "world"));
        stack.expire();
        assert_eq!(stack.len(), 1);
    }

    /// Newest toast is first in render order.
    #[test]
    fn test_newest_first() {
        let mut stack = ToastStack::new(Duration::from_secs(60));
        stack.push(Toast::info("first", ""));
        stack.push(Toast::info("second", ""));
        assert_eq!(stack.toasts()[0].title, "second");
    }
}
