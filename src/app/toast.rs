use chrono::{DateTime, Duration, Local};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: i64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Local>,
}

impl Toast {
    pub fn expires_at(&self) -> DateTime<Local> {
        self.created_at + Duration::milliseconds(TOAST_LIFETIME_MS)
    }
}

/// Transient notifications, newest last.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push_at(message, ToastKind::Error, Local::now());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push_at(message, ToastKind::Info, Local::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, kind: ToastKind, now: DateTime<Local>) {
        self.items.push(Toast {
            message: message.into(),
            kind,
            created_at: now,
        });
    }

    /// Drops every toast whose lifetime has passed.
    pub fn prune(&mut self, now: DateTime<Local>) {
        self.items.retain(|toast| toast.expires_at() > now);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
