//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::SentinelColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid blue action button
    #[default]
    Primary,
    /// White segment of a button group
    Segment,
    /// Borderless blue text link
    Link,
    /// Icon-only, gray until hovered
    Icon,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    icon: Option<SharedString>,
    variant: ButtonVariant,
    active: bool,
    disabled: bool,
    full_width: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ButtonVariant::Primary,
            active: false,
            disabled: false,
            full_width: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Glyph drawn before the label
    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Highlight a segment as the selected one of its group
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a button-group segment
    pub fn segment(id: impl Into<ElementId>, label: impl Into<SharedString>, active: bool) -> Self {
        Self::new(id, label).variant(ButtonVariant::Segment).active(active)
    }

    /// Create a text link button
    pub fn link(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Link)
    }

    /// Create an icon-only button
    pub fn icon_only(id: impl Into<ElementId>, glyph: impl Into<SharedString>) -> Self {
        Self::new(id, glyph).variant(ButtonVariant::Icon)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let transparent = gpui::rgba(0x00000000);
        let (bg_color, text_color, hover_bg, hover_text) = match (self.variant, self.active) {
            (ButtonVariant::Primary, _) | (ButtonVariant::Segment, true) => (
                SentinelColors::accent(),
                SentinelColors::text_light(),
                SentinelColors::accent_hover(),
                SentinelColors::text_light(),
            ),
            (ButtonVariant::Segment, false) => (
                SentinelColors::card_bg(),
                SentinelColors::text_primary(),
                SentinelColors::hover_bg(),
                SentinelColors::text_primary(),
            ),
            (ButtonVariant::Link, _) => (
                transparent,
                SentinelColors::accent(),
                transparent,
                SentinelColors::accent_hover(),
            ),
            (ButtonVariant::Icon, _) => (
                transparent,
                SentinelColors::text_secondary(),
                transparent,
                SentinelColors::accent(),
            ),
        };

        let (padding_x, padding_y) = match self.variant {
            ButtonVariant::Primary | ButtonVariant::Segment => (px(16.0), px(8.0)),
            ButtonVariant::Link => (px(0.0), px(4.0)),
            ButtonVariant::Icon => (px(8.0), px(8.0)),
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_sm()
            .cursor_pointer()
            .when(self.variant == ButtonVariant::Primary, |el| el.rounded_lg())
            .when(self.full_width, |el| el.w_full())
            .when(self.disabled, |el| el.opacity(0.5))
            .when_some(self.icon, |el, icon| el.child(div().text_xs().child(icon)))
            .child(self.label);

        if !self.disabled {
            element = element.hover(move |s| s.bg(hover_bg).text_color(hover_text));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
