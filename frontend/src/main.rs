//! Soundrise Main Entry Point

use std::sync::OnceLock;
use zoon::*;

/// Stores the main application task handle to prevent it from being dropped.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

// Core modules
mod app;
mod auth_gateway;
mod dataflow;
mod live_feed;
mod local_store;
mod notifications;
mod session;
mod toast_ui;
mod toasts;

// View modules
mod auth_pages;
mod coming_soon;
mod dashboard;
mod header;
mod pages;

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = crate::app::SoundriseApp::new();

        let root_element = app.root();
        start_app("app", move || root_element);

        // The app owns the live-feed task handles; keep it alive for the
        // whole page lifetime so the simulated feed keeps running.
        let _app = app;
        std::future::pending::<()>().await
    });
    let _ = MAIN_TASK.set(handle);
}
