//! FeedImageState - Downloaded Camera Feed Images

use std::collections::HashMap;
use std::sync::Arc;

use gpui::Image;

/// Load state of one feed image
#[derive(Clone, Default)]
pub enum FeedImage {
    #[default]
    Loading,
    Ready(Arc<Image>),
    Failed,
}

impl FeedImage {
    /// Translation key of the text shown instead of the image
    pub fn placeholder_key(&self) -> Option<&'static str> {
        match self {
            FeedImage::Loading => Some("feed.loading"),
            FeedImage::Ready(_) => None,
            FeedImage::Failed => Some("feed.unavailable"),
        }
    }
}

/// Feed images keyed by feed source URL
#[derive(Default)]
pub struct FeedImageState {
    images: HashMap<&'static str, FeedImage>,
}

impl FeedImageState {
    /// Image for a feed source; unknown sources are still loading
    pub fn get(&self, source: &str) -> FeedImage {
        self.images.get(source).cloned().unwrap_or_default()
    }

    pub fn ready(&mut self, source: &'static str, image: Image) {
        self.images.insert(source, FeedImage::Ready(Arc::new(image)));
    }

    pub fn fail(&mut self, source: &'static str) {
        self.images.insert(source, FeedImage::Failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::ImageFormat;

    const SOURCE: &str = "https://example.com/feed.gif";

    #[test]
    fn unknown_source_is_loading() {
        let state = FeedImageState::default();
        assert!(matches!(state.get(SOURCE), FeedImage::Loading));
        assert_eq!(state.get(SOURCE).placeholder_key(), Some("feed.loading"));
    }

    #[test]
    fn ready_image_has_no_placeholder() {
        let mut state = FeedImageState::default();
        state.ready(SOURCE, Image::from_bytes(ImageFormat::Gif, b"GIF89a".to_vec()));
        assert!(matches!(state.get(SOURCE), FeedImage::Ready(_)));
        assert_eq!(state.get(SOURCE).placeholder_key(), None);
    }

    #[test]
    fn failed_fetch_shows_unavailable() {
        let mut state = FeedImageState::default();
        state.fail(SOURCE);
        assert_eq!(state.get(SOURCE).placeholder_key(), Some("feed.unavailable"));
    }
}
