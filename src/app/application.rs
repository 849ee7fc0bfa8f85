//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::rc::Rc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::workspace::Workspace;
use crate::app::ContactBus;
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::eventing::EventBus;
use crate::services::feed;

actions!(contacts, [Quit]);

/// Run the contact table application
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        cx.set_global(ContactBus(Rc::new(EventBus::new())));

        // Feed thread -> UI thread
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        if let Err(err) = feed::spawn(&config.feed, event_tx) {
            tracing::error!(%err, "Failed to start contact feed");
        }

        let window = &config.window;
        let bounds = Bounds::centered(None, gpui::size(px(window.width), px(window.height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(window.title.clone())),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(event_rx, cx))
        });
        if let Err(err) = opened {
            tracing::error!(%err, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
