//! Coming-soon placeholders for the non-artist audiences.

use zoon::*;

use crate::app::{Audience, Page};
use crate::dataflow::Atom;

pub fn coming_soon_page(audience: Audience, current_page: Atom<Page>) -> impl Element {
    Column::new()
        .s(Align::new().center_x())
        .s(Padding::new().x(24).y(64))
        .s(Gap::new().y(16))
        .update_raw_el(|raw_el| raw_el.style("max-width", "560px"))
        .item(
            El::new()
                .s(Font::new().size(14).color("rgb(130, 170, 255)"))
                .s(Align::new().center_x())
                .child("Coming soon"),
        )
        .item(
            El::new()
                .s(Font::new().size(32).weight(FontWeight::Bold))
                .s(Align::new().center_x())
                .child(audience.title()),
        )
        .item(
            El::new()
                .s(Font::new().size(15).color("rgb(178, 185, 204)").line_height(24))
                .s(Align::new().center_x())
                .child(audience.pitch()),
        )
        .item(
            El::new()
                .s(Font::new().size(13).color("rgb(100, 108, 128)"))
                .s(Align::new().center_x())
                .s(Padding::new().top(16))
                .child("We are building this right now. Artist accounts are open today."),
        )
        .item(
            Button::new()
                .s(Align::new().center_x())
                .s(Font::new().size(14).color("rgb(130, 170, 255)"))
                .s(Borders::all(Border::new().width(1).color("rgb(34, 39, 54)")))
                .s(RoundedCorners::all(6))
                .s(Padding::new().x(16).y(8))
                .label("Back to home")
                .on_press(move || current_page.set_neq(Page::Home)),
        )
}
