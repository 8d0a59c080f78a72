//! Site header: navigation, unread badge, connection dot, auth controls.

use zoon::*;

use crate::app::Page;
use crate::dataflow::Atom;
use crate::notifications::Notifications;
use crate::session::Session;

pub fn header(
    session: Session,
    notifications: Notifications,
    current_page: Atom<Page>,
) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(24).y(12))
        .s(Gap::new().x(16))
        .s(Align::new().center_y())
        .s(Background::new().color("rgb(16, 19, 28)"))
        .s(Borders::new().bottom(Border::new().width(1).color("rgb(34, 39, 54)")))
        .item(logo(current_page.clone()))
        .item(nav_link("How it works", Page::HowItWorks, current_page.clone()))
        .item(nav_link("Pricing", Page::Pricing, current_page.clone()))
        .item(nav_link("Blog", Page::Blog, current_page.clone()))
        .item(nav_link("About", Page::About, current_page.clone()))
        .item(El::new().s(Width::fill()))
        .item(connection_indicator(&notifications))
        .item_signal(
            session
                .is_authenticated_signal()
                .map_true({
                    let notifications = notifications.clone();
                    let current_page = current_page.clone();
                    move || notification_bell(notifications.clone(), current_page.clone())
                }),
        )
        .item(auth_controls(session, current_page))
}

fn logo(current_page: Atom<Page>) -> impl Element {
    Button::new()
        .s(Font::new().size(20).weight(FontWeight::Bold).color("rgb(130, 170, 255)"))
        .s(Padding::new().y(4))
        .label("Soundrise")
        .on_press(move || current_page.set_neq(Page::Home))
}

fn nav_link(label: &'static str, page: Page, current_page: Atom<Page>) -> impl Element {
    let is_current = current_page.signal().map(move |current| current == page);
    Button::new()
        .s(Font::new().size(14).color_signal(is_current.map_bool(
            || "rgb(228, 231, 238)",
            || "rgb(148, 156, 176)",
        )))
        .s(Padding::new().x(8).y(4))
        .label(label)
        .on_press(move || current_page.set_neq(page))
}

fn connection_indicator(notifications: &Notifications) -> impl Element + use<> {
    let is_connected = notifications.is_connected_signal();
    Row::new()
        .s(Gap::new().x(6))
        .s(Align::new().center_y())
        .item(
            El::new()
                .s(Width::exact(8))
                .s(Height::exact(8))
                .s(RoundedCorners::all_max())
                .s(Background::new().color_signal(
                    notifications.is_connected_signal().map_bool(
                        || "rgb(52, 199, 89)",
                        || "rgb(148, 156, 176)",
                    ),
                )),
        )
        .item(
            El::new()
                .s(Font::new().size(12).color("rgb(148, 156, 176)"))
                .child_signal(is_connected.map_bool(|| "Live", || "Offline")),
        )
}

fn notification_bell(notifications: Notifications, current_page: Atom<Page>) -> impl Element {
    Button::new()
        .s(Padding::new().x(8).y(4))
        .label(
            Row::new()
                .s(Gap::new().x(4))
                .item(El::new().s(Font::new().size(16)).child("🔔"))
                .item_signal(notifications.unread_count_signal().map(|count| {
                    (count > 0).then(|| {
                        El::new()
                            .s(Font::new().size(12).weight(FontWeight::Bold).color("rgb(255, 255, 255)"))
                            .s(Background::new().color("rgb(199, 66, 72)"))
                            .s(RoundedCorners::all_max())
                            .s(Padding::new().x(6).y(2))
                            .child(Text::new(count.to_string()))
                    })
                })),
        )
        .on_press(move || current_page.set_neq(Page::Dashboard))
}

fn auth_controls(session: Session, current_page: Atom<Page>) -> impl Element {
    Row::new()
        .s(Gap::new().x(8))
        .s(Align::new().center_y())
        .item_signal(session.is_authenticated_signal().map_bool(
            {
                let session = session.clone();
                let current_page = current_page.clone();
                move || authenticated_controls(session.clone(), current_page.clone()).unify()
            },
            {
                let current_page = current_page.clone();
                move || visitor_controls(current_page.clone()).unify()
            },
        ))
}

fn authenticated_controls(session: Session, current_page: Atom<Page>) -> impl Element {
    Row::new()
        .s(Gap::new().x(12))
        .s(Align::new().center_y())
        .item(
            Button::new()
                .s(Font::new().size(14).color("rgb(228, 231, 238)"))
                .label_signal(session.user_signal().map(|user| {
                    user.map(|user| user.artist_name).unwrap_or_default()
                }))
                .on_press({
                    let current_page = current_page.clone();
                    move || current_page.set_neq(Page::Dashboard)
                }),
        )
        .item(
            Button::new()
                .s(Font::new().size(14).color("rgb(148, 156, 176)"))
                .s(Borders::all(Border::new().width(1).color("rgb(34, 39, 54)")))
                .s(RoundedCorners::all(6))
                .s(Padding::new().x(12).y(6))
                .label("Log out")
                .on_press(move || {
                    session.logout_requested_relay.send(());
                    current_page.set_neq(Page::Home);
                }),
        )
}

fn visitor_controls(current_page: Atom<Page>) -> impl Element {
    Row::new()
        .s(Gap::new().x(8))
        .item(
            Button::new()
                .s(Font::new().size(14).color("rgb(228, 231, 238)"))
                .s(Padding::new().x(12).y(6))
                .label("Log in")
                .on_press({
                    let current_page = current_page.clone();
                    move || current_page.set_neq(Page::Login)
                }),
        )
        .item(
            Button::new()
                .s(Font::new().size(14).weight(FontWeight::SemiBold).color("rgb(10, 12, 18)"))
                .s(Background::new().color("rgb(130, 170, 255)"))
                .s(RoundedCorners::all(6))
                .s(Padding::new().x(12).y(6))
                .label("Sign up")
                .on_press(move || current_page.set_neq(Page::Register)),
        )
}
