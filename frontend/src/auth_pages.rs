//! Login and registration forms.
//!
//! Forms hold their field values in local `Atom<String>` state and feed the
//! session relays on submit. Loading and error state come straight from the
//! session signals; a successful login navigates to the dashboard.

use zoon::*;

use shared::{Credentials, RegistrationProfile};

use crate::app::Page;
use crate::dataflow::Atom;
use crate::session::Session;

pub fn login_page(session: Session, current_page: Atom<Page>) -> impl Element {
    let email = Atom::new(String::new());
    let password = Atom::new(String::new());

    let submit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        move || {
            session.login_submitted_relay.send(Credentials {
                email: email.get_cloned(),
                password: password.get_cloned(),
            });
        }
    };

    form_card("Log in")
        .item(error_banner(&session))
        .item(field("Email", "you@example.com", false, email))
        .item(field("Password", "Password", true, password))
        .item(submit_button("Log in", &session, submit))
        .item(
            Button::new()
                .s(Align::new().center_x())
                .s(Font::new().size(13).color("rgb(130, 170, 255)"))
                .label("No account yet? Sign up")
                .on_press({
                    let current_page = current_page.clone();
                    move || current_page.set_neq(Page::Register)
                }),
        )
        .after_remove({
            let task = dashboard_redirect(session, current_page);
            move |_| drop(task)
        })
}

pub fn register_page(session: Session, current_page: Atom<Page>) -> impl Element {
    let email = Atom::new(String::new());
    let password = Atom::new(String::new());
    let artist_name = Atom::new(String::new());
    let full_name = Atom::new(String::new());
    let country = Atom::new(String::new());

    let submit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let artist_name = artist_name.clone();
        let full_name = full_name.clone();
        let country = country.clone();
        move || {
            session.register_submitted_relay.send(RegistrationProfile {
                email: email.get_cloned(),
                password: password.get_cloned(),
                artist_name: artist_name.get_cloned(),
                full_name: full_name.get_cloned(),
                country: country.get_cloned(),
            });
        }
    };

    form_card("Create your account")
        .item(error_banner(&session))
        .item(field("Artist name", "Artist or band name", false, artist_name))
        .item(field("Full name", "Legal name for payouts", false, full_name))
        .item(field("Country", "Country of residence", false, country))
        .item(field("Email", "you@example.com", false, email))
        .item(field("Password", "Password", true, password))
        .item(submit_button("Sign up", &session, submit))
        .item(
            Button::new()
                .s(Align::new().center_x())
                .s(Font::new().size(13).color("rgb(130, 170, 255)"))
                .label("Already have an account? Log in")
                .on_press({
                    let current_page = current_page.clone();
                    move || current_page.set_neq(Page::Login)
                }),
        )
        .after_remove({
            let task = dashboard_redirect(session, current_page);
            move |_| drop(task)
        })
}

fn form_card(title: &'static str) -> Column<column::EmptyFlagNotSet, RawHtmlEl> {
    Column::new()
        .s(Width::exact(380))
        .s(Align::new().center_x())
        .s(Padding::all(32))
        .s(Gap::new().y(16))
        .s(Background::new().color("rgb(16, 19, 28)"))
        .s(Borders::all(Border::new().width(1).color("rgb(34, 39, 54)")))
        .s(RoundedCorners::all(12))
        .update_raw_el(|raw_el| raw_el.style("margin-top", "48px"))
        .item(
            El::new()
                .s(Font::new().size(24).weight(FontWeight::Bold))
                .s(Align::new().center_x())
                .child(title),
        )
}

fn field(
    label: &'static str,
    placeholder: &'static str,
    is_password: bool,
    value: Atom<String>,
) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(6))
        .item(
            El::new()
                .s(Font::new().size(13).color("rgb(148, 156, 176)"))
                .child(label),
        )
        .item({
            let input = TextInput::new()
                .s(Width::fill())
                .s(Padding::new().x(12).y(10))
                .s(Font::new().size(14).color("rgb(228, 231, 238)"))
                .s(Background::new().color("rgb(10, 12, 18)"))
                .s(Borders::all(Border::new().width(1).color("rgb(34, 39, 54)")))
                .s(RoundedCorners::all(6))
                .placeholder(
                    Placeholder::new(placeholder)
                        .s(Font::new().color("rgb(100, 108, 128)")),
                )
                .text_signal(value.signal())
                .label_hidden(label)
                .on_change(move |new_value| value.set_neq(new_value));
            if is_password {
                input.input_type(InputType::password()).unify()
            } else {
                input.unify()
            }
        })
}

fn error_banner(session: &Session) -> impl Element + use<> {
    let error_cleared_relay = session.error_cleared_relay.clone();
    El::new().s(Width::fill()).child_signal(session.error_signal().map(move |error| {
        let error_cleared_relay = error_cleared_relay.clone();
        error.map(|error| {
            Row::new()
                .s(Width::fill())
                .s(Padding::new().x(12).y(8))
                .s(Gap::new().x(8))
                .s(Background::new().color("rgb(56, 22, 24)"))
                .s(Borders::all(Border::new().width(1).color("rgb(199, 66, 72)")))
                .s(RoundedCorners::all(6))
                .item(
                    El::new()
                        .s(Width::fill())
                        .s(Font::new().size(13).color("rgb(248, 214, 216)").wrap_anywhere())
                        .child(error),
                )
                .item(
                    Button::new()
                        .s(Font::new().size(13).color("rgb(248, 214, 216)"))
                        .label("✕")
                        .on_press(move || error_cleared_relay.send(())),
                )
        })
    }))
}

fn submit_button<F: Fn() + 'static>(
    label: &'static str,
    session: &Session,
    on_submit: F,
) -> impl Element + use<F> {
    let is_loading = session.is_loading_signal().broadcast();
    Button::new()
        .s(Width::fill())
        .s(Font::new().size(15).weight(FontWeight::SemiBold).color("rgb(10, 12, 18)"))
        .s(Background::new().color_signal(is_loading.signal().map_bool(
            || "rgb(84, 104, 148)",
            || "rgb(130, 170, 255)",
        )))
        .s(RoundedCorners::all(8))
        .s(Padding::new().y(10))
        .label_signal(
            is_loading
                .signal()
                .map_bool(move || "Please wait...", move || label),
        )
        .on_press(on_submit)
}

/// Watches the session and jumps to the dashboard once authenticated.
/// The handle is dropped in `after_remove`, so the watcher lives exactly
/// as long as the form is on screen.
fn dashboard_redirect(session: Session, current_page: Atom<Page>) -> TaskHandle {
    use futures::StreamExt;

    Task::start_droppable(async move {
        let mut authenticated_stream = session.is_authenticated_signal().to_stream();
        while let Some(is_authenticated) = authenticated_stream.next().await {
            if is_authenticated {
                current_page.set_neq(Page::Dashboard);
            }
        }
    })
}
