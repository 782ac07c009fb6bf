use shared_types::{Notification, NotificationLevel};
use std::sync::{Arc, Mutex, PoisonError};

/// Sink for user-facing notifications (toasts in the UI, lines in the CLI).
pub trait Notifier {
    fn notify(&self, notification: Notification);

    fn success(&self, title: &str) {
        self.notify(Notification::success(title));
    }

    fn error(&self, title: &str) {
        self.notify(Notification::error(title));
    }

    fn info(&self, title: &str) {
        self.notify(Notification::info(title));
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Writes notifications to the tracing log and nowhere else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let description = notification.description.as_deref().unwrap_or("");
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!(title = %notification.title, description, "notification");
            }
            NotificationLevel::Error => {
                tracing::warn!(title = %notification.title, description, "notification");
            }
        }
    }
}

/// Keeps every notification in memory so callers can inspect or replay them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far, oldest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the recorded notifications.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn titles(&self) -> Vec<String> {
        self.snapshot().into_iter().map(|n| n.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(title = %notification.title, "recorded notification");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
