//! Feed Fetch
//!
//! Downloads the camera feed images on the background executor and hands
//! the bytes to `FeedImageState`.

use std::time::Duration;

use gpui::{App, Entity, Image, ImageFormat};
use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::constants::FEED_FETCH_TIMEOUT_SECS;
use crate::error::{Error, Result};
use crate::fixtures;
use crate::state::feed_image_state::FeedImageState;

/// Raw image bytes with their detected format
pub struct FetchedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl FetchedImage {
    pub fn into_image(self) -> Image {
        Image::from_bytes(self.format, self.bytes)
    }
}

/// Detect the image format from its magic bytes
pub fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => Some(ImageFormat::Png),
        [0xFF, 0xD8, 0xFF, ..] => Some(ImageFormat::Jpeg),
        [b'G', b'I', b'F', b'8', ..] => Some(ImageFormat::Gif),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(ImageFormat::Webp),
        [b'B', b'M', ..] => Some(ImageFormat::Bmp),
        _ => None,
    }
}

/// Shared blocking HTTP client
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(FEED_FETCH_TIMEOUT_SECS))
        .user_agent(concat!("sentinel-dash/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Download one feed image
pub fn fetch_feed_image(client: &Client, url: &str) -> Result<FetchedImage> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes()?.to_vec();
    let format = sniff_format(&bytes).ok_or_else(|| Error::Invalid {
        message: format!("unrecognized image data from {url}"),
    })?;
    Ok(FetchedImage { format, bytes })
}

/// Start downloading every fixture camera feed
pub fn load_feed_images(images: Entity<FeedImageState>, cx: &mut App) {
    let client = match http_client() {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "HTTP client unavailable, feeds will not load");
            images.update(cx, |state, cx| {
                for camera in fixtures::cameras() {
                    state.fail(camera.feed_source);
                }
                cx.notify();
            });
            return;
        }
    };

    for camera in fixtures::cameras() {
        let url = camera.feed_source;
        let client = client.clone();
        let images = images.clone();

        cx.spawn(async move |cx| {
            let result = cx
                .background_executor()
                .spawn(async move { fetch_feed_image(&client, url) })
                .await;

            let _ = images.update(cx, |state, cx| {
                match result {
                    Ok(fetched) => {
                        info!(url, bytes = fetched.bytes.len(), "Feed image loaded");
                        state.ready(url, fetched.into_image());
                    }
                    Err(e) => {
                        warn!(url, error = %e, "Failed to load feed image");
                        state.fail(url);
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_common_formats() {
        assert!(matches!(sniff_format(b"GIF89a\x01\x00"), Some(ImageFormat::Gif)));
        assert!(matches!(
            sniff_format(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]),
            Some(ImageFormat::Png)
        ));
        assert!(matches!(sniff_format(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg)));
        assert!(matches!(sniff_format(b"RIFF\0\0\0\0WEBPVP8 "), Some(ImageFormat::Webp)));
    }

    #[test]
    fn rejects_html_error_pages() {
        assert!(sniff_format(b"<!DOCTYPE html>").is_none());
        assert!(sniff_format(&[]).is_none());
    }
}
