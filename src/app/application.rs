//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    px, size, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions,
};

use crate::app::actions::{new_key_bindings, MenuAction};
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;
use crate::i18n::t;

/// Run the application with the given configuration
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys(new_key_bindings());

        // Set up action handlers
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            size(px(config.window.width()), px(config.window.height())),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(config.locale, "app-title")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let root_config = config.clone();
        let opened = cx.open_window(window_options, move |_window, cx| {
            cx.new(|cx| Workspace::new(&root_config, cx))
        });

        if let Err(err) = opened {
            tracing::error!("Failed to open main window: {err}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
