//! Informational pages: home, how it works, pricing, blog, about.
//!
//! Static content only. Every page is a plain column; navigation happens
//! through the shared `Atom<Page>`.

use zoon::*;

use crate::app::{Audience, Page};
use crate::dataflow::Atom;

fn page_column() -> Column<column::EmptyFlagSet, RawHtmlEl> {
    Column::new()
        .s(Width::fill())
        .s(Align::new().center_x())
        .s(Padding::new().x(24).y(48))
        .s(Gap::new().y(24))
        .update_raw_el(|raw_el| raw_el.style("max-width", "860px"))
}

fn page_title(title: &'static str) -> impl Element {
    El::new()
        .s(Font::new().size(32).weight(FontWeight::Bold))
        .child(title)
}

fn paragraph(text: &'static str) -> impl Element {
    El::new()
        .s(Font::new().size(15).color("rgb(178, 185, 204)").line_height(24))
        .child(text)
}

pub fn home_page(current_page: Atom<Page>) -> impl Element {
    page_column()
        .item(
            El::new()
                .s(Font::new().size(44).weight(FontWeight::Bold))
                .s(Align::new().center_x())
                .child("Your music, everywhere"),
        )
        .item(
            El::new()
                .s(Font::new().size(17).color("rgb(178, 185, 204)"))
                .s(Align::new().center_x())
                .child("Distribute to every major streaming service and keep 100% of your rights."),
        )
        .item(
            Button::new()
                .s(Align::new().center_x())
                .s(Font::new().size(16).weight(FontWeight::SemiBold).color("rgb(10, 12, 18)"))
                .s(Background::new().color("rgb(130, 170, 255)"))
                .s(RoundedCorners::all(8))
                .s(Padding::new().x(24).y(12))
                .label("Start releasing")
                .on_press({
                    let current_page = current_page.clone();
                    move || current_page.set_neq(Page::Register)
                }),
        )
        .item(
            El::new()
                .s(Font::new().size(14).color("rgb(148, 156, 176)"))
                .s(Align::new().center_x())
                .s(Padding::new().top(24))
                .child("Not an artist? Soundrise is coming soon for:"),
        )
        .item(audience_links(current_page))
}

fn audience_links(current_page: Atom<Page>) -> impl Element {
    let audiences = [
        Audience::Producer,
        Audience::Manager,
        Audience::Venue,
        Audience::Publisher,
        Audience::Journalist,
        Audience::Fan,
    ];
    Row::new()
        .s(Align::new().center_x())
        .s(Gap::new().x(8))
        .multiline()
        .items(audiences.into_iter().map(move |audience| {
            Button::new()
                .s(Font::new().size(13).color("rgb(130, 170, 255)"))
                .s(Borders::all(Border::new().width(1).color("rgb(34, 39, 54)")))
                .s(RoundedCorners::all_max())
                .s(Padding::new().x(12).y(6))
                .label(audience.title())
                .on_press({
                    let current_page = current_page.clone();
                    move || current_page.set_neq(Page::ComingSoon(audience))
                })
        }))
}

pub fn how_it_works_page() -> impl Element {
    page_column()
        .item(page_title("How it works"))
        .item(paragraph(
            "Upload your tracks and artwork once. We transcode, validate metadata \
             and deliver to every connected store and streaming service.",
        ))
        .item(paragraph(
            "Releases go live on the date you pick. Streaming and revenue reports \
             land in your dashboard as the stores publish them.",
        ))
        .item(paragraph(
            "Royalties are paid out monthly with no minimum balance. You keep your \
             masters and can take your catalog elsewhere at any time.",
        ))
}

pub fn pricing_page(current_page: Atom<Page>) -> impl Element {
    page_column()
        .item(page_title("Pricing"))
        .item(
            Row::new()
                .s(Gap::new().x(16))
                .s(Align::new().center_x())
                .item(plan_card(
                    "Free",
                    "$0",
                    "2 releases per year, standard delivery, monthly reports.",
                ))
                .item(plan_card(
                    "Artist",
                    "$5/mo",
                    "Unlimited releases, pre-save links, daily streaming stats.",
                ))
                .item(plan_card(
                    "Label",
                    "$20/mo",
                    "Multiple artist profiles, revenue splits, priority support.",
                )),
        )
        .item(
            Button::new()
                .s(Align::new().center_x())
                .s(Font::new().size(15).color("rgb(130, 170, 255)"))
                .label("Create an account to pick a plan")
                .on_press(move || current_page.set_neq(Page::Register)),
        )
}

fn plan_card(name: &'static str, price: &'static str, blurb: &'static str) -> impl Element {
    Column::new()
        .s(Width::exact(240))
        .s(Padding::all(20))
        .s(Gap::new().y(12))
        .s(Background::new().color("rgb(16, 19, 28)"))
        .s(Borders::all(Border::new().width(1).color("rgb(34, 39, 54)")))
        .s(RoundedCorners::all(12))
        .item(El::new().s(Font::new().size(18).weight(FontWeight::SemiBold)).child(name))
        .item(El::new().s(Font::new().size(28).weight(FontWeight::Bold)).child(price))
        .item(
            El::new()
                .s(Font::new().size(13).color("rgb(178, 185, 204)").line_height(20))
                .child(blurb),
        )
}

pub fn blog_page() -> impl Element {
    page_column()
        .item(page_title("Blog"))
        .item(blog_entry(
            "Why pre-save campaigns still work in 2026",
            "Editorial playlists matter less than they used to. First-day listener \
             counts matter more. Here is how to stack the deck before release day.",
        ))
        .item(blog_entry(
            "Reading your first royalty statement",
            "Streams, rates, recoupment and the difference between a master royalty \
             and a composition royalty, explained without the legalese.",
        ))
        .item(blog_entry(
            "Metadata mistakes that delay releases",
            "The five validation errors we see most often, and how to fix them \
             before they cost you your release date.",
        ))
}

fn blog_entry(title: &'static str, summary: &'static str) -> impl Element {
    Column::new()
        .s(Gap::new().y(8))
        .s(Padding::new().y(12))
        .s(Borders::new().bottom(Border::new().width(1).color("rgb(34, 39, 54)")))
        .item(El::new().s(Font::new().size(19).weight(FontWeight::SemiBold)).child(title))
        .item(
            El::new()
                .s(Font::new().size(14).color("rgb(178, 185, 204)").line_height(22))
                .child(summary),
        )
}

pub fn about_page() -> impl Element {
    page_column()
        .item(page_title("About Soundrise"))
        .item(paragraph(
            "Soundrise was started by independent artists who were tired of \
             distributors that take a cut of royalties and lock in catalogs.",
        ))
        .item(paragraph(
            "We deliver to every major platform, pay out monthly and never claim \
             rights to your music. That is the whole business model.",
        ))
}
