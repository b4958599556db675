//! Fullscreen Overlay
//!
//! Covers the whole window, header and sidebar included, with a black
//! backdrop and hosts one panel. Painted deferred and anchored at the window
//! origin so the caller's layout box doesn't clip it.

use gpui::{
    anchored, deferred, div, point, prelude::*, px, AnyElement, App, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::theme::colors::SentinelColors;

/// Full-viewport overlay
#[derive(IntoElement)]
pub struct FullscreenOverlay {
    content: AnyElement,
}

impl FullscreenOverlay {
    pub fn new(content: impl IntoElement) -> Self {
        Self {
            content: content.into_any_element(),
        }
    }
}

impl RenderOnce for FullscreenOverlay {
    fn render(self, window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let viewport = window.viewport_size();

        deferred(
            anchored().position(point(px(0.0), px(0.0))).child(
                div()
                    .id("fullscreen-overlay")
                    .occlude()
                    .w(viewport.width)
                    .h(viewport.height)
                    .p_4()
                    .bg(SentinelColors::fullscreen_bg())
                    .flex()
                    .flex_col()
                    .overflow_y_scroll()
                    .child(self.content),
            ),
        )
        .with_priority(1)
    }
}
