//! Artist dashboard: profile summary and the notification list.

use zoon::*;

use shared::UserProfile;

use crate::app::Page;
use crate::dataflow::Atom;
use crate::notifications::{Notification, NotificationKind, Notifications, now_ms};
use crate::session::Session;

pub fn dashboard_page(
    session: Session,
    notifications: Notifications,
    current_page: Atom<Page>,
) -> impl Element {
    El::new()
        .s(Width::fill())
        .child_signal(session.user_signal().map(move |user| match user {
            Some(user) => dashboard_content(user, notifications.clone()).unify(),
            None => login_prompt(current_page.clone()).unify(),
        }))
}

fn login_prompt(current_page: Atom<Page>) -> impl Element {
    Column::new()
        .s(Align::new().center_x())
        .s(Padding::new().y(64))
        .s(Gap::new().y(16))
        .item(
            El::new()
                .s(Font::new().size(18).color("rgb(178, 185, 204)"))
                .child("Log in to see your dashboard."),
        )
        .item(
            Button::new()
                .s(Align::new().center_x())
                .s(Font::new().size(15).weight(FontWeight::SemiBold).color("rgb(10, 12, 18)"))
                .s(Background::new().color("rgb(130, 170, 255)"))
                .s(RoundedCorners::all(8))
                .s(Padding::new().x(20).y(10))
                .label("Log in")
                .on_press(move || current_page.set_neq(Page::Login)),
        )
}

fn dashboard_content(user: UserProfile, notifications: Notifications) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Align::new().center_x())
        .s(Padding::new().x(24).y(32))
        .s(Gap::new().y(24))
        .update_raw_el(|raw_el| raw_el.style("max-width", "860px"))
        .item(profile_card(user))
        .item(notifications_panel(notifications))
}

fn profile_card(user: UserProfile) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(24))
        .s(Gap::new().y(12))
        .s(Background::new().color("rgb(16, 19, 28)"))
        .s(Borders::all(Border::new().width(1).color("rgb(34, 39, 54)")))
        .s(RoundedCorners::all(12))
        .item(
            Row::new()
                .s(Gap::new().x(8))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Font::new().size(24).weight(FontWeight::Bold))
                        .child(user.artist_name.clone()),
                )
                .item_signal(always(user.verified).map_true(|| {
                    El::new()
                        .s(Font::new().size(12).color("rgb(52, 199, 89)"))
                        .s(Borders::all(Border::new().width(1).color("rgb(52, 199, 89)")))
                        .s(RoundedCorners::all_max())
                        .s(Padding::new().x(8).y(2))
                        .child("Verified")
                })),
        )
        .item(profile_row("Name", user.name))
        .item(profile_row("Email", user.email))
        .item(profile_row("Plan", user.plan.display_name().to_string()))
        .item(profile_row("Member since", user.joined_at))
}

fn profile_row(label: &'static str, value: String) -> impl Element {
    Row::new()
        .s(Gap::new().x(12))
        .item(
            El::new()
                .s(Width::exact(110))
                .s(Font::new().size(13).color("rgb(148, 156, 176)"))
                .child(label),
        )
        .item(El::new().s(Font::new().size(14)).child(value))
}

fn notifications_panel(notifications: Notifications) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(12))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(12))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Font::new().size(18).weight(FontWeight::SemiBold))
                        .child("Notifications"),
                )
                .item_signal(notifications.unread_count_signal().map(|count| {
                    (count > 0).then(|| {
                        El::new()
                            .s(Font::new().size(12).color("rgb(148, 156, 176)"))
                            .child(Text::new(format!("{count} unread")))
                    })
                }))
                .item(El::new().s(Width::fill()))
                .item(panel_action_button("Mark all read", {
                    let all_read_relay = notifications.all_read_relay.clone();
                    move || all_read_relay.send(())
                }))
                .item(panel_action_button("Clear", {
                    let cleared_relay = notifications.notifications_cleared_relay.clone();
                    move || cleared_relay.send(())
                })),
        )
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(8))
                .items_signal_vec(notifications.entries_signal_vec().map({
                    let notifications = notifications.clone();
                    move |notification| notification_row(notification, notifications.clone())
                }))
                .item_signal(notifications.entries_signal().map(|entries| {
                    entries.is_empty().then(|| {
                        El::new()
                            .s(Font::new().size(14).color("rgb(100, 108, 128)"))
                            .s(Padding::new().y(16))
                            .child("Nothing yet. New activity shows up here.")
                    })
                })),
        )
}

fn panel_action_button(label: &'static str, on_press: impl Fn() + 'static) -> impl Element {
    Button::new()
        .s(Font::new().size(13).color("rgb(130, 170, 255)"))
        .s(Borders::all(Border::new().width(1).color("rgb(34, 39, 54)")))
        .s(RoundedCorners::all(6))
        .s(Padding::new().x(10).y(5))
        .label(label)
        .on_press(on_press)
}

fn kind_accent(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "rgb(52, 153, 90)",
        NotificationKind::Info => "rgb(64, 120, 205)",
        NotificationKind::Warning => "rgb(196, 146, 44)",
        NotificationKind::Error => "rgb(199, 66, 72)",
    }
}

fn notification_row(notification: Notification, notifications: Notifications) -> impl Element {
    let read_relay = notifications.notification_read_relay.clone();
    let id = notification.id.clone();
    let is_unread = !notification.read;

    Row::new()
        .s(Width::fill())
        .s(Padding::all(12))
        .s(Gap::new().x(12))
        .s(Background::new().color(if is_unread {
            "rgb(20, 24, 36)"
        } else {
            "rgb(16, 19, 28)"
        }))
        .s(Borders::all(Border::new().width(1).color("rgb(34, 39, 54)")))
        .s(RoundedCorners::all(8))
        .item(
            El::new()
                .s(Font::new().size(18))
                .child(notification.category.icon()),
        )
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(4))
                .item(
                    Row::new()
                        .s(Gap::new().x(8))
                        .s(Align::new().center_y())
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(14)
                                    .weight(if is_unread {
                                        FontWeight::SemiBold
                                    } else {
                                        FontWeight::Number(400)
                                    })
                                    .color(kind_accent(notification.kind)))
                                .child(notification.title.clone()),
                        )
                        .item(
                            El::new()
                                .s(Font::new().size(12).color("rgb(100, 108, 128)"))
                                .child(age_label(notification.timestamp_ms)),
                        ),
                )
                .item(
                    El::new()
                        .s(Font::new().size(13).color("rgb(178, 185, 204)").wrap_anywhere())
                        .child(notification.message.clone()),
                )
                .item(notification.action.clone().map(|action| {
                    Button::new()
                        .s(Align::new().left())
                        .s(Font::new().size(13).color("rgb(130, 170, 255)"))
                        .label(action.label.clone())
                        .on_press(move || action.activated_relay.send(()))
                })),
        )
        .item(is_unread.then(|| {
            Button::new()
                .s(Align::new().center_y())
                .s(Font::new().size(12).color("rgb(130, 170, 255)"))
                .label("Mark read")
                .on_press(move || read_relay.send(id.clone()))
        }))
}

fn age_label(timestamp_ms: f64) -> String {
    let elapsed_minutes = ((now_ms() - timestamp_ms) / 60_000.0).floor();
    if elapsed_minutes < 1.0 {
        "just now".to_string()
    } else if elapsed_minutes < 60.0 {
        format!("{elapsed_minutes:.0}m ago")
    } else {
        format!("{:.0}h ago", elapsed_minutes / 60.0)
    }
}
