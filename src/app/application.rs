//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::fixtures::DashboardCharts;
use crate::i18n::{tr, Locale};
use crate::services::feed_fetch;

actions!(sentinel, [Quit]);

/// Run the dashboard application
pub fn run_app(config: AppConfig, locale: Locale, charts: DashboardCharts) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(locale, charts, cx);
        cx.set_global(entities.clone());

        // Feed images download in the background
        feed_fetch::load_feed_images(entities.feed_images.clone(), cx);

        // Create main window
        let size = gpui::size(
            px(config.window.width.max(MIN_WINDOW_WIDTH)),
            px(config.window.height.max(MIN_WINDOW_HEIGHT)),
        );
        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(tr(locale, "app.title")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
