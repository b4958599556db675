//! Sidebar Component
//!
//! Navigation sidebar with page links.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{NavigationIntent, Route};
use crate::constants::SIDEBAR_WIDTH;
use crate::i18n::{tr, Locale};
use crate::theme::colors::SentinelColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe navigation changes
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, route: Route, locale: Locale, active: Route) -> impl IntoElement {
        let is_active = route == active;
        let label = tr(locale, route.title_key());
        let entities = self.entities.clone();

        let (bg_color, text_color, border_color) = if is_active {
            (
                SentinelColors::accent_soft(),
                SentinelColors::accent(),
                SentinelColors::accent(),
            )
        } else {
            (
                gpui::rgba(0x00000000),
                SentinelColors::text_secondary(),
                gpui::rgba(0x00000000),
            )
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", route)))
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .gap_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(SentinelColors::hover_bg()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.navigation.update(cx, |nav, cx| {
                    if nav.active() != route {
                        nav.navigate(NavigationIntent::to(route));
                        cx.notify();
                    }
                });
            })
            .child(route.icon())
            .child(label)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active = self.entities.navigation.read(cx).active();

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(SentinelColors::sidebar_bg())
            .border_r_1()
            .border_color(SentinelColors::border_strong())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                Route::all()
                    .iter()
                    .map(|route| self.render_nav_item(*route, locale, active)),
            )
    }
}
