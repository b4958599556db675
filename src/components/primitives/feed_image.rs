//! Feed Image Component
//!
//! A downloaded feed frame, or a centered placeholder while it loads or
//! after it failed.

use gpui::{
    div, img, prelude::*, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::i18n::{tr, Locale};
use crate::state::feed_image_state::{FeedImage, FeedImageState};
use crate::theme::colors::SentinelColors;

/// Feed image filling its parent
#[derive(IntoElement)]
pub struct FeedImageView {
    image: FeedImage,
    placeholder: SharedString,
    opacity: f32,
}

impl FeedImageView {
    /// `placeholder` is shown unless the image is ready
    pub fn new(image: FeedImage, placeholder: impl Into<SharedString>) -> Self {
        Self {
            image,
            placeholder: placeholder.into(),
            opacity: 1.0,
        }
    }

    /// Look up a feed source and translate its placeholder
    pub fn for_source(images: &FeedImageState, source: &str, locale: Locale) -> Self {
        let image = images.get(source);
        let placeholder = image
            .placeholder_key()
            .map(|key| tr(locale, key))
            .unwrap_or_default();
        Self::new(image, placeholder)
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

impl RenderOnce for FeedImageView {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        match self.image {
            FeedImage::Ready(image) => img(image)
                .size_full()
                .opacity(self.opacity)
                .into_any_element(),
            FeedImage::Loading | FeedImage::Failed => div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .bg(SentinelColors::feed_bg())
                .text_xs()
                .text_color(SentinelColors::text_muted())
                .child(self.placeholder)
                .into_any_element(),
        }
    }
}
