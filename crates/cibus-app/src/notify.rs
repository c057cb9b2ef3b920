//! User-facing failure notifications.

use cibus_core::FailureKind;

/// One blocking notice shown to the user after a failed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: FailureKind,
    pub message: String,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Where failure notices go. Called at most once per failed action.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notices in order; handy for headless runs and tests.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Reports notices as `error` events on the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        tracing::error!(kind = %notification.kind, "{}", notification.message);
    }
}
