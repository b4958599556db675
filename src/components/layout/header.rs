//! Header Component
//!
//! The application header with logo, title, and language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::tr;
use crate::theme::colors::SentinelColors;
use crate::utils::config_store;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = tr(locale, "app.title");
        let lang_label = locale.toggled().display_name();

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(SentinelColors::feed_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(28.0))
                            .rounded_md()
                            .bg(SentinelColors::accent())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(SentinelColors::text_light())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("S"),
                    )
                    .child(
                        div()
                            .text_color(SentinelColors::text_light())
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    ),
            )
            // Right side: language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(gpui::rgba(0xffffff22))
                    .text_color(SentinelColors::text_light())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            tracing::info!(locale = i18n.locale.code(), "Locale switched");
                            if let Err(e) = config_store::persist_locale(i18n.locale.code()) {
                                tracing::warn!(error = %e, "Failed to save locale");
                            }
                            cx.notify();
                        });
                    })
                    .child(lang_label),
            )
    }
}
