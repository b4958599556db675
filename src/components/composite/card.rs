//! Card Component
//!
//! White rounded panel with a title row, an optional trailing action and
//! free content.

use gpui::{
    div, prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::theme::colors::SentinelColors;

/// Card component
#[derive(IntoElement)]
pub struct Card {
    title: SharedString,
    subtitle: Option<SharedString>,
    action: Option<AnyElement>,
    children: Vec<AnyElement>,
}

impl Card {
    /// Create a new card
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            action: None,
            children: Vec::new(),
        }
    }

    /// Gray line under the title
    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Element aligned right of the title
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.action = Some(action.into_any_element());
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .p_4()
            .bg(SentinelColors::card_bg())
            .rounded_xl()
            .border_1()
            .border_color(SentinelColors::border())
            .shadow_sm()
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .mb_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_lg()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(SentinelColors::text_primary())
                                    .child(self.title),
                            )
                            .when_some(self.subtitle, |el, subtitle| {
                                el.child(
                                    div()
                                        .text_sm()
                                        .text_color(SentinelColors::text_secondary())
                                        .child(subtitle),
                                )
                            }),
                    )
                    .when_some(self.action, |el, action| el.child(action)),
            )
            // Content
            .children(self.children)
    }
}
