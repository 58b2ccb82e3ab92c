//! Dismissible notification queue for form and network feedback.
//!
//! DESIGN
//! ======
//! Network failures never crash the render tree; they land here as
//! user-visible, manually dismissible entries. Success feedback uses the same
//! queue so forms have one reporting path.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Visual category of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One dismissible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique id so dismissal targets the right entry.
    pub id: String,
    pub kind: ToastKind,
    /// Short headline ("Login failed!").
    pub title: String,
    /// Longer detail, usually the server's message.
    pub detail: Option<String>,
}

/// Shared notification state rendered by `components::toast`.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
}

impl NotifyState {
    pub fn push_success(&mut self, title: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), None);
    }

    pub fn push_error(&mut self, title: impl Into<String>, detail: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), Some(detail.into()));
    }

    fn push(&mut self, kind: ToastKind, title: String, detail: Option<String>) {
        self.toasts.push(Toast {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            title,
            detail,
        });
    }

    /// Remove one notification by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
