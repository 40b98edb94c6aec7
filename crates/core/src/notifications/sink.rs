//! Notification sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::Notification;

/// Trait for presenting notifications to the user.
///
/// `notify()` must not block; the form keeps running whether or not the
/// message was shown.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);

    /// Present several notifications in order.
    fn notify_all(&self, notifications: Vec<Notification>) {
        for notification in notifications {
            self.notify(notification);
        }
    }
}

/// Routes notifications to the `log` facade.
///
/// Useful when the core runs without a presentation layer attached.
#[derive(Clone, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, notification: Notification) {
        if notification.is_error() {
            log::warn!("{}: {}", notification.title, notification.message);
        } else {
            log::info!("{}: {}", notification.title, notification.message);
        }
    }
}

/// Mock sink for testing - collects presented notifications.
#[derive(Clone, Default)]
pub struct MockNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.lock().unwrap().is_empty()
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ToastVariant;

    #[test]
    fn test_log_sink_does_not_panic() {
        let sink = LogNotificationSink;
        sink.notify(Notification::error("Error fetching rate", "rate unavailable"));
        sink.notify(Notification::success("Trade created successfully", "ok"));
    }

    #[test]
    fn test_mock_sink_collects_in_order() {
        let sink = MockNotificationSink::new();
        assert!(sink.is_empty());

        sink.notify_all(vec![
            Notification::error("Invalid Input", "first"),
            Notification::success("Done", "second"),
        ]);

        assert_eq!(sink.len(), 2);
        let collected = sink.notifications();
        assert_eq!(collected[0].message, "first");
        assert_eq!(collected[1].variant, ToastVariant::Success);
        assert_eq!(sink.last().unwrap().title, "Done");

        sink.clear();
        assert!(sink.is_empty());
    }
}
