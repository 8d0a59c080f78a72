//! Toast overlay rendering
//!
//! Fixed overlay in the top-right corner showing the active toasts.
//! Each toast runs its own countdown actor: auto-dismiss after its
//! configured time, click to pause/resume, ✕ to dismiss immediately.

use futures::{StreamExt, select};
use zoon::*;
use zoon::events::Click;

use crate::dataflow::{Actor, relay};
use crate::notifications::NotificationKind;
use crate::toasts::{Toast, ToastTray};

/// Remaining lifetime of a toast in percent (100.0 → 0.0)
type Progress = f32;

pub fn toast_overlay(tray: ToastTray) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Align::new().top().right())
        .s(Padding::all(16))
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "fixed")
                .style("top", "0")
                .style("left", "0")
                .style("pointer-events", "none") // Let clicks pass through empty areas
                .style("z-index", "1000")
        })
        .child(
            Column::new()
                .s(Gap::new().y(8))
                .s(Width::exact(380))
                .s(Align::new().top().right())
                .update_raw_el(|raw_el| {
                    raw_el.style("pointer-events", "auto")
                })
                .items_signal_vec(tray.active_toasts.signal_vec().map({
                    move |toast| toast_element(toast, tray.clone())
                })),
        )
}

fn kind_colors(kind: NotificationKind) -> (&'static str, &'static str, &'static str) {
    // (background, border/accent, text)
    match kind {
        NotificationKind::Success => ("rgb(22, 48, 32)", "rgb(52, 153, 90)", "rgb(212, 240, 222)"),
        NotificationKind::Info => ("rgb(21, 35, 56)", "rgb(64, 120, 205)", "rgb(214, 228, 248)"),
        NotificationKind::Warning => ("rgb(55, 43, 18)", "rgb(196, 146, 44)", "rgb(247, 232, 201)"),
        NotificationKind::Error => ("rgb(56, 22, 24)", "rgb(199, 66, 72)", "rgb(248, 214, 216)"),
    }
}

fn toast_element(toast: Toast, tray: ToastTray) -> impl Element {
    let (toast_clicked_relay, mut toast_clicked_stream) = relay();
    let (dismiss_clicked_relay, mut dismiss_clicked_stream) = relay();
    let auto_dismiss_ms = toast.auto_dismiss_ms as f32;
    let toast_id = toast.id.clone();
    let (background, accent, text) = kind_colors(toast.kind);

    let countdown_actor = Actor::new(100.0 as Progress, async move |state_handle| {
        let mut elapsed_ms = 0.0f32;
        let mut is_paused = false;
        let update_interval_ms = 50.0f32;

        loop {
            select! {
                // Timer::sleep is not a FusedFuture, which select! requires
                _ = Timer::sleep(update_interval_ms as u32).fuse() => {
                    if !is_paused {
                        elapsed_ms += update_interval_ms;

                        let remaining_percent = 100.0 - (elapsed_ms / auto_dismiss_ms * 100.0);
                        state_handle.set(remaining_percent.max(0.0));

                        if elapsed_ms >= auto_dismiss_ms {
                            tray.dismiss(&toast_id);
                            break;
                        }
                    }
                }
                event = toast_clicked_stream.next() => {
                    if let Some(()) = event {
                        is_paused = !is_paused;
                    }
                }
                event = dismiss_clicked_stream.next() => {
                    if let Some(()) = event {
                        tray.dismiss(&toast_id);
                        break;
                    }
                }
            }
        }
    });

    Column::new()
        .s(Width::fill())
        .s(Background::new().color(background))
        .s(Borders::all(Border::new().width(1).color(accent)))
        .s(RoundedCorners::all(8))
        .s(Cursor::new(CursorIcon::Pointer))
        .update_raw_el(|raw_el| {
            raw_el.attr("title", "Click to pause/resume auto-dismiss")
        })
        .on_click(move || toast_clicked_relay.send(()))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Padding::all(12))
                .s(Gap::new().x(8))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Font::new().size(18))
                        .child(toast.icon),
                )
                .item(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(4))
                        .item(
                            El::new()
                                .s(Font::new().size(15).weight(FontWeight::SemiBold).color(text))
                                .child(toast.title.clone()),
                        )
                        .item(
                            El::new()
                                .s(Font::new().size(13).color(text).wrap_anywhere())
                                .child(toast.message.clone()),
                        ),
                )
                .item(toast.action.clone().map(|action| {
                    Button::new()
                        .s(Font::new().size(13).color(text))
                        .s(Borders::all(Border::new().width(1).color(accent)))
                        .s(RoundedCorners::all(4))
                        .s(Padding::new().x(8).y(4))
                        .label(action.label.clone())
                        .on_press(move || action.activated_relay.send(()))
                }))
                .item(
                    El::new()
                        .s(Font::new().size(13).color(text))
                        .s(Cursor::new(CursorIcon::Pointer))
                        .s(Padding::all(4))
                        .s(RoundedCorners::all(4))
                        .child("✕")
                        .update_raw_el(move |raw_el| {
                            raw_el.event_handler(move |event: Click| {
                                event.stop_propagation();
                                dismiss_clicked_relay.send(());
                            })
                        }),
                ),
        )
        .item(
            // Countdown bar along the bottom edge
            El::new()
                .s(Width::fill())
                .s(Height::exact(3))
                .s(RoundedCorners::new().bottom_left(8).bottom_right(8))
                .child(
                    El::new()
                        .s(Height::fill())
                        .s(Width::percent_signal(countdown_actor.signal()))
                        .s(Background::new().color(accent))
                        .s(RoundedCorners::new().bottom_left(8).bottom_right(8))
                        .s(Transitions::new([
                            Transition::property("width").duration(150)
                        ]))
                        .update_raw_el(|raw_el| {
                            raw_el.style("transform-origin", "left")
                        }),
                ),
        )
        .after_remove(move |_| {
            drop(countdown_actor);
        })
}
