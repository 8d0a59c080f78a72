//! SoundriseApp - Self-contained Actor+Relay Architecture

use zoon::*;

use crate::auth_gateway::ApiGateway;
use crate::dataflow::Atom;
use crate::live_feed::{LiveFeed, start_live_feed};
use crate::local_store::LocalStore;
use crate::notifications::Notifications;
use crate::session::Session;
use crate::toasts::ToastTray;

/// Which signup placeholder the visitor navigated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Producer,
    Manager,
    Venue,
    Publisher,
    Journalist,
    Fan,
}

impl Audience {
    pub fn title(self) -> &'static str {
        match self {
            Audience::Producer => "For Producers",
            Audience::Manager => "For Managers",
            Audience::Venue => "For Venues",
            Audience::Publisher => "For Publishers",
            Audience::Journalist => "For Journalists",
            Audience::Fan => "For Fans",
        }
    }

    pub fn pitch(self) -> &'static str {
        match self {
            Audience::Producer => {
                "Pitch your catalog to artists on the platform and split royalties automatically."
            }
            Audience::Manager => {
                "Manage every artist roster from one dashboard, with shared release calendars."
            }
            Audience::Venue => {
                "Find touring artists whose streaming numbers match your room size."
            }
            Audience::Publisher => {
                "Track composition royalties alongside master royalties in one statement."
            }
            Audience::Journalist => {
                "Get pre-release access and verified streaming data for your coverage."
            }
            Audience::Fan => {
                "Follow artists and get notified the moment new music drops."
            }
        }
    }
}

/// Current visible page. Navigation is plain state switching, there is
/// no URL routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    HowItWorks,
    Pricing,
    Blog,
    About,
    Login,
    Register,
    Dashboard,
    ComingSoon(Audience),
}

/// Self-contained Soundrise application
pub struct SoundriseApp {
    /// Account session domain (login, register, logout, restore)
    pub session: Session,

    /// Notification feed domain (entries, unread count, live connection)
    pub notifications: Notifications,

    /// Active toasts backing the overlay tray
    pub toast_tray: ToastTray,

    /// Currently visible page
    pub current_page: Atom<Page>,

    /// Simulated live-feed tasks; dropping this disconnects the feed
    _live_feed: LiveFeed,
}

impl SoundriseApp {
    pub fn new() -> Self {
        let session = Session::new(ApiGateway, LocalStore);
        let toast_tray = ToastTray::new();
        let notifications = Notifications::new(toast_tray.clone());
        let live_feed = start_live_feed(&notifications);
        let current_page = Atom::new(Page::Home);

        SoundriseApp {
            session,
            notifications,
            toast_tray,
            current_page,
            _live_feed: live_feed,
        }
    }

    pub fn root(&self) -> impl Element + use<> {
        Stack::new()
            .s(Height::screen())
            .s(Width::fill())
            .s(Background::new().color("rgb(10, 12, 18)"))
            .s(Font::new().color("rgb(228, 231, 238)").family([
                FontFamily::new("Inter"),
                FontFamily::new("system-ui"),
                FontFamily::new("Segoe UI"),
                FontFamily::new("Arial"),
                FontFamily::SansSerif,
            ]))
            .layer(self.main_layout())
            .layer(crate::toast_ui::toast_overlay(self.toast_tray.clone()))
    }

    fn main_layout(&self) -> impl Element + use<> {
        let session = self.session.clone();
        let notifications = self.notifications.clone();
        let current_page = self.current_page.clone();

        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .item(crate::header::header(
                session.clone(),
                notifications.clone(),
                current_page.clone(),
            ))
            .item(
                El::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .s(Scrollbars::both())
                    .child_signal(current_page.signal().map(move |page| match page {
                        Page::Home => crate::pages::home_page(current_page.clone()).unify(),
                        Page::HowItWorks => crate::pages::how_it_works_page().unify(),
                        Page::Pricing => crate::pages::pricing_page(current_page.clone()).unify(),
                        Page::Blog => crate::pages::blog_page().unify(),
                        Page::About => crate::pages::about_page().unify(),
                        Page::Login => crate::auth_pages::login_page(
                            session.clone(),
                            current_page.clone(),
                        )
                        .unify(),
                        Page::Register => crate::auth_pages::register_page(
                            session.clone(),
                            current_page.clone(),
                        )
                        .unify(),
                        Page::Dashboard => crate::dashboard::dashboard_page(
                            session.clone(),
                            notifications.clone(),
                            current_page.clone(),
                        )
                        .unify(),
                        Page::ComingSoon(audience) => {
                            crate::coming_soon::coming_soon_page(audience, current_page.clone())
                                .unify()
                        }
                    })),
            )
    }
}
