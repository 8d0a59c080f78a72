//! Toast presentation seam and the browser toast tray
//!
//! The notification domain forwards every new entry to a `ToastPresenter`
//! for ephemeral on-screen display. The browser implementation is the
//! `ToastTray` rendered by `toast_ui`; tests inject a recording presenter.

use futures::{StreamExt, select};

use crate::dataflow::{ActorVec, Relay, relay};
use crate::notifications::{NotificationAction, NotificationKind};

/// How long a toast stays up before auto-dismissing.
pub const TOAST_DISMISS_MS: u64 = 5000;

/// Ephemeral on-screen notice.
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: String,
    pub kind: NotificationKind,
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub action: Option<NotificationAction>,
    pub auto_dismiss_ms: u64,
}

/// Fire-and-forget toast presentation. No return value is consumed.
pub trait ToastPresenter: Send + Sync + 'static {
    fn present(&self, toast: Toast);
}

/// Active-toasts domain backing the overlay tray.
#[derive(Clone)]
pub struct ToastTray {
    pub active_toasts: ActorVec<Toast>,
    toast_added_relay: Relay<Toast>,
    toast_dismissed_relay: Relay<String>,
}

impl ToastTray {
    pub fn new() -> Self {
        let (toast_added_relay, mut toast_added_stream) = relay::<Toast>();
        let (toast_dismissed_relay, mut toast_dismissed_stream) = relay::<String>();

        let active_toasts = ActorVec::new(vec![], async move |toasts| {
            loop {
                select! {
                    toast = toast_added_stream.next() => {
                        if let Some(toast) = toast {
                            toasts.push_cloned(toast);
                        }
                    }
                    dismissed_id = toast_dismissed_stream.next() => {
                        if let Some(id) = dismissed_id {
                            toasts.retain(|toast| toast.id != id);
                        }
                    }
                }
            }
        });

        Self {
            active_toasts,
            toast_added_relay,
            toast_dismissed_relay,
        }
    }

    /// Dismiss a toast by id, from the countdown timer or the ✕ button.
    pub fn dismiss(&self, id: &str) {
        self.toast_dismissed_relay.send(id.to_string());
    }
}

impl ToastPresenter for ToastTray {
    fn present(&self, toast: Toast) {
        self.toast_added_relay.send(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationKind;

    fn toast(id: &str) -> Toast {
        Toast {
            id: id.to_string(),
            kind: NotificationKind::Info,
            icon: "⚙",
            title: "Title".into(),
            message: "Message".into(),
            action: None,
            auto_dismiss_ms: TOAST_DISMISS_MS,
        }
    }

    #[tokio::test]
    async fn presented_toasts_stack_and_dismiss_by_id() {
        let tray = ToastTray::new();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        tray.present(toast("toast_1"));
        tray.present(toast("toast_2"));
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let active = tray.active_toasts.to_stream().next().await.unwrap();
        assert_eq!(active.len(), 2);

        tray.dismiss("toast_1");
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let active = tray.active_toasts.to_stream().next().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "toast_2");
    }
}
