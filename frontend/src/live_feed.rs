//! Simulated live notification feed
//!
//! Stands in for a real push channel: after a startup delay the feed
//! "connects", then every period runs a Bernoulli trial and sometimes
//! emits one of four canned notifications. A separate one-shot welcome
//! notification fires shortly after startup regardless of connection
//! state. The returned handle owns both timers; dropping it cancels them
//! and reports the feed as disconnected.

use zoon::*;

use crate::dataflow::Relay;
use crate::notifications::{
    NotificationCategory, NotificationDraft, NotificationKind, Notifications,
};

const CONNECT_DELAY_MS: u32 = 2_000;
const FEED_PERIOD_MS: u32 = 15_000;
const EMIT_PROBABILITY: f64 = 0.3;
const WELCOME_DELAY_MS: u32 = 3_000;

/// Handle for the running feed. Dropping it cancels the startup delay,
/// the periodic timer and the welcome one-shot.
pub struct LiveFeed {
    connection_changed_relay: Relay<bool>,
    _feed_task: TaskHandle,
    _welcome_task: TaskHandle,
}

pub fn start_live_feed(notifications: &Notifications) -> LiveFeed {
    let connection_changed_relay = notifications.connection_changed_relay.clone();

    let feed_task = Task::start_droppable({
        let connection_changed_relay = connection_changed_relay.clone();
        let notification_added_relay = notifications.notification_added_relay.clone();
        async move {
            Timer::sleep(CONNECT_DELAY_MS).await;
            connection_changed_relay.send(true);

            loop {
                Timer::sleep(FEED_PERIOD_MS).await;
                // Bernoulli trial per tick: most ticks stay quiet
                if should_emit(random_unit()) {
                    notification_added_relay.send(pick_template(random_unit()));
                }
            }
        }
    });

    let welcome_task = Task::start_droppable({
        let notification_added_relay = notifications.notification_added_relay.clone();
        async move {
            Timer::sleep(WELCOME_DELAY_MS).await;
            notification_added_relay.send(welcome_notification());
        }
    });

    LiveFeed {
        connection_changed_relay,
        _feed_task: feed_task,
        _welcome_task: welcome_task,
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        // Runs before the task handles drop, so the state flip lands
        // while the notification domain is still listening.
        self.connection_changed_relay.send(false);
    }
}

fn should_emit(sample: f64) -> bool {
    sample < EMIT_PROBABILITY
}

fn pick_template(sample: f64) -> NotificationDraft {
    let index = ((sample * 4.0) as usize).min(3);
    match index {
        0 => NotificationDraft::new(
            NotificationKind::Success,
            NotificationCategory::Upload,
            "Upload processed",
            "Your track \"Midnight Run\" cleared validation.",
        ),
        1 => NotificationDraft::new(
            NotificationKind::Info,
            NotificationCategory::Analytics,
            "Streams are climbing",
            "Your catalog gained 1,240 streams this week.",
        ),
        2 => NotificationDraft::new(
            NotificationKind::Success,
            NotificationCategory::Revenue,
            "Royalties on the way",
            "A payout of $18.40 is queued for your account.",
        ),
        _ => NotificationDraft::new(
            NotificationKind::Info,
            NotificationCategory::Release,
            "Release reminder",
            "\"Northern Lights\" goes live on Friday.",
        ),
    }
}

fn welcome_notification() -> NotificationDraft {
    NotificationDraft::new(
        NotificationKind::Info,
        NotificationCategory::System,
        "Welcome to Soundrise",
        "Your artist workspace is ready. Upload your first release whenever you are.",
    )
}

#[cfg(target_arch = "wasm32")]
fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// Native builds only reach this from tests; clock-derived jitter is
/// plenty for a simulated feed.
#[cfg(not(target_arch = "wasm32"))]
fn random_unit() -> f64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    f64::from(nanos % 1_000) / 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::{Toast, ToastPresenter};

    struct NullPresenter;

    impl ToastPresenter for NullPresenter {
        fn present(&self, _toast: Toast) {}
    }

    async fn settle() {
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    }

    async fn connected(notifications: &Notifications) -> bool {
        notifications
            .is_connected_signal()
            .to_stream()
            .next()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn dropping_the_feed_reports_disconnected() {
        let notifications = Notifications::new(NullPresenter);
        settle().await;

        let feed = start_live_feed(&notifications);
        // Flip the connection directly instead of waiting out the
        // startup delay; only the teardown path is under test here.
        notifications.connection_changed_relay.send(true);
        settle().await;
        assert!(connected(&notifications).await);

        drop(feed);
        settle().await;
        assert!(!connected(&notifications).await);
    }

    #[tokio::test]
    async fn welcome_notification_lands_in_the_feed() {
        let notifications = Notifications::new(NullPresenter);
        settle().await;

        notifications
            .notification_added_relay
            .send(welcome_notification());
        settle().await;

        let entries = notifications
            .entries_signal()
            .to_stream()
            .next()
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Welcome to Soundrise");
        assert!(matches!(entries[0].category, NotificationCategory::System));
        assert!(matches!(entries[0].kind, NotificationKind::Info));
        assert!(!entries[0].read);
    }

    #[test]
    fn emission_is_a_bernoulli_trial_against_the_fixed_probability() {
        assert!(should_emit(0.0));
        assert!(should_emit(0.29));
        assert!(!should_emit(0.3));
        assert!(!should_emit(0.99));
    }

    #[test]
    fn template_selection_covers_all_four_templates() {
        let titles: Vec<_> = [0.0, 0.3, 0.6, 0.9]
            .into_iter()
            .map(|sample| pick_template(sample).title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Upload processed",
                "Streams are climbing",
                "Royalties on the way",
                "Release reminder",
            ]
        );
    }

    #[test]
    fn out_of_range_sample_clamps_to_last_template() {
        assert_eq!(pick_template(1.0).title, "Release reminder");
    }
}
