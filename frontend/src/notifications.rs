//! Notifications Actor+Relay Domain
//!
//! Owns the in-memory, newest-first list of transient notifications and
//! the unread-count derivation. Every added entry is also forwarded to the
//! injected `ToastPresenter` for ephemeral display. The list is not
//! persisted; dropping the domain discards it.

use std::sync::atomic::{AtomicUsize, Ordering};

use futures::{StreamExt, select};
use zoon::*;

use crate::dataflow::{Actor, ActorVec, Relay, relay};
use crate::toasts::{TOAST_DISMISS_MS, Toast, ToastPresenter};

static NOTIFICATION_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationCategory {
    Upload,
    Revenue,
    Analytics,
    Release,
    System,
}

impl NotificationCategory {
    /// Icon shown on the toast for this category.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationCategory::Upload => "⬆",
            NotificationCategory::Revenue => "💰",
            NotificationCategory::Analytics => "📈",
            NotificationCategory::Release => "🎵",
            NotificationCategory::System => "⚙",
        }
    }
}

/// Single user-triggerable follow-up attached to a notification.
#[derive(Clone, Debug)]
pub struct NotificationAction {
    pub label: String,
    pub activated_relay: Relay<()>,
}

/// One entry in the notification list.
#[derive(Clone, Debug)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    /// Creation time, unix milliseconds.
    pub timestamp_ms: f64,
    pub read: bool,
    pub action: Option<NotificationAction>,
}

/// A notification minus the generated fields (id, timestamp, read flag).
#[derive(Clone, Debug)]
pub struct NotificationDraft {
    pub kind: NotificationKind,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    pub action: Option<NotificationAction>,
}

impl NotificationDraft {
    pub fn new(
        kind: NotificationKind,
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        NotificationDraft {
            kind,
            category,
            title: title.into(),
            message: message.into(),
            action: None,
        }
    }
}

/// Notifications domain with proper Actor+Relay architecture.
#[derive(Clone)]
pub struct Notifications {
    entries: ActorVec<Notification>,
    is_connected: Actor<bool>,
    pub notification_added_relay: Relay<NotificationDraft>,
    pub notification_read_relay: Relay<String>,
    pub all_read_relay: Relay<()>,
    pub notifications_cleared_relay: Relay<()>,
    /// Live-feed connection state; sent by the feed task and its teardown.
    pub connection_changed_relay: Relay<bool>,
}

impl Notifications {
    pub fn new<P: ToastPresenter>(presenter: P) -> Self {
        let (notification_added_relay, mut notification_added_stream) =
            relay::<NotificationDraft>();
        let (notification_read_relay, mut notification_read_stream) = relay::<String>();
        let (all_read_relay, mut all_read_stream) = relay::<()>();
        let (notifications_cleared_relay, mut notifications_cleared_stream) = relay::<()>();
        let (connection_changed_relay, mut connection_changed_stream) = relay::<bool>();

        let is_connected = Actor::new(false, async move |state| {
            while let Some(connected) = connection_changed_stream.next().await {
                state.set_neq(connected);
            }
        });

        let entries = ActorVec::new(vec![], async move |entries| {
            loop {
                select! {
                    draft = notification_added_stream.next() => {
                        if let Some(draft) = draft {
                            let notification = materialize(draft);
                            entries.insert_cloned(0, notification.clone());
                            presenter.present(toast_for(&notification));
                        }
                    }
                    id = notification_read_stream.next() => {
                        if let Some(id) = id {
                            // Unknown ids are silently ignored
                            entries.update(|items| {
                                let found = items.iter().position(|n| n.id == id);
                                if let Some(index) = found {
                                    let mut entry = items[index].clone();
                                    entry.read = true;
                                    items.set_cloned(index, entry);
                                }
                            });
                        }
                    }
                    all_read = all_read_stream.next() => {
                        if let Some(()) = all_read {
                            entries.update(|items| {
                                for index in 0..items.len() {
                                    if !items[index].read {
                                        let mut entry = items[index].clone();
                                        entry.read = true;
                                        items.set_cloned(index, entry);
                                    }
                                }
                            });
                        }
                    }
                    cleared = notifications_cleared_stream.next() => {
                        if let Some(()) = cleared {
                            entries.clear();
                        }
                    }
                }
            }
        });

        Notifications {
            entries,
            is_connected,
            notification_added_relay,
            notification_read_relay,
            all_read_relay,
            notifications_cleared_relay,
            connection_changed_relay,
        }
    }

    /// Newest-first entry stream for list rendering.
    pub fn entries_signal_vec(&self) -> impl zoon::SignalVec<Item = Notification> + use<> {
        self.entries.signal_vec()
    }

    /// Full snapshot signal, mostly for tests and derived counts.
    pub fn entries_signal(&self) -> impl Signal<Item = Vec<Notification>> + use<> {
        self.entries.signal()
    }

    /// Count of entries with `read == false`.
    pub fn unread_count_signal(&self) -> impl Signal<Item = usize> + use<> {
        self.entries
            .signal_ref(|entries| entries.iter().filter(|n| !n.read).count())
    }

    /// Whether the simulated live feed is currently connected.
    pub fn is_connected_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.is_connected.signal()
    }
}

/// Stamp a draft into a full notification: fresh id, current time, unread.
fn materialize(draft: NotificationDraft) -> Notification {
    let id = NOTIFICATION_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    Notification {
        id: format!("notification_{id}"),
        kind: draft.kind,
        category: draft.category,
        title: draft.title,
        message: draft.message,
        timestamp_ms: now_ms(),
        read: false,
        action: draft.action,
    }
}

fn toast_for(notification: &Notification) -> Toast {
    Toast {
        id: notification.id.clone(),
        kind: notification.kind,
        icon: notification.category.icon(),
        title: notification.title.clone(),
        message: notification.message.clone(),
        action: notification.action.clone(),
        auto_dismiss_ms: TOAST_DISMISS_MS,
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingPresenter {
        presented: Arc<Mutex<Vec<Toast>>>,
    }

    impl ToastPresenter for RecordingPresenter {
        fn present(&self, toast: Toast) {
            self.presented.lock().unwrap().push(toast);
        }
    }

    fn draft(title: &str) -> NotificationDraft {
        NotificationDraft::new(
            NotificationKind::Success,
            NotificationCategory::Revenue,
            title,
            "$5",
        )
    }

    async fn settle() {
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    }

    async fn snapshot(notifications: &Notifications) -> Vec<Notification> {
        notifications.entries_signal().to_stream().next().await.unwrap()
    }

    #[tokio::test]
    async fn added_notifications_prepend_and_present_toasts() {
        let presenter = RecordingPresenter::default();
        let presented = presenter.presented.clone();
        let notifications = Notifications::new(presenter);
        settle().await;

        notifications.notification_added_relay.send(draft("A"));
        notifications.notification_added_relay.send(draft("B"));
        notifications.notification_added_relay.send(draft("C"));
        settle().await;

        let entries = snapshot(&notifications).await;
        let titles: Vec<_> = entries.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
        assert!(entries.iter().all(|n| !n.read));

        // Fresh ids, one toast per entry with the category icon
        let ids: std::collections::HashSet<_> =
            entries.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids.len(), 3);

        let toasts = presented.lock().unwrap();
        assert_eq!(toasts.len(), 3);
        assert!(toasts.iter().all(|t| t.icon == "💰"));
    }

    #[tokio::test]
    async fn unread_count_tracks_read_flags() {
        let notifications = Notifications::new(RecordingPresenter::default());
        settle().await;

        notifications.notification_added_relay.send(draft("A"));
        notifications.notification_added_relay.send(draft("B"));
        settle().await;

        let count = notifications
            .unread_count_signal()
            .to_stream()
            .next()
            .await
            .unwrap();
        assert_eq!(count, 2);

        let first_id = snapshot(&notifications).await[0].id.clone();
        notifications.notification_read_relay.send(first_id);
        settle().await;

        let count = notifications
            .unread_count_signal()
            .to_stream()
            .next()
            .await
            .unwrap();
        assert_eq!(count, 1);

        notifications.all_read_relay.send(());
        settle().await;

        let count = notifications
            .unread_count_signal()
            .to_stream()
            .next()
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn mark_as_read_with_unknown_id_is_a_no_op() {
        let notifications = Notifications::new(RecordingPresenter::default());
        settle().await;

        notifications.notification_added_relay.send(draft("A"));
        settle().await;

        notifications
            .notification_read_relay
            .send("notification_does_not_exist".to_string());
        settle().await;

        let entries = snapshot(&notifications).await;
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].read);
    }

    #[tokio::test]
    async fn clear_then_mark_as_read_keeps_list_empty() {
        let notifications = Notifications::new(RecordingPresenter::default());
        settle().await;

        notifications.notification_added_relay.send(draft("A"));
        settle().await;
        let id = snapshot(&notifications).await[0].id.clone();

        notifications.notifications_cleared_relay.send(());
        settle().await;
        notifications.notification_read_relay.send(id);
        settle().await;

        assert!(snapshot(&notifications).await.is_empty());
    }

    #[tokio::test]
    async fn connection_state_follows_relay() {
        let notifications = Notifications::new(RecordingPresenter::default());
        settle().await;

        let connected = notifications
            .is_connected_signal()
            .to_stream()
            .next()
            .await
            .unwrap();
        assert!(!connected);

        notifications.connection_changed_relay.send(true);
        settle().await;

        let connected = notifications
            .is_connected_signal()
            .to_stream()
            .next()
            .await
            .unwrap();
        assert!(connected);
    }
}
