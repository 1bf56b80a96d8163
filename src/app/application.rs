//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::settings::UiSettings;
use crate::i18n::t;
use crate::utils::config_store;

actions!(counter_gui, [Quit]);

/// Run the counter application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            // If no windows remain, quit the application
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        // Load persisted UI settings, falling back to defaults
        let settings = match config_store::load_config::<UiSettings>("settings.json") {
            Ok(settings) => match settings.validate() {
                Ok(()) => settings,
                Err(e) => {
                    tracing::warn!("Ignoring saved settings: {}", e);
                    UiSettings::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to load settings: {}", e);
                UiSettings::default()
            }
        };

        entities.i18n.update(cx, |i18n, cx| {
            i18n.set_locale(settings.locale);
            cx.notify();
        });
        entities.settings.update(cx, |state, cx| {
            state.update_settings(settings.clone());
            cx.notify();
        });

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(settings.window.width), px(settings.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(settings.locale, "app-title")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        })
        .expect("failed to open main window");

        cx.activate(true);
    });
}
