//! Cameras Page
//!
//! Read-only listing of every camera with its status and detection counts.

use gpui::{
    div, prelude::*, px, Context, InteractiveElement, IntoElement, ParentElement, Render,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::feed_image::FeedImageView;
use crate::constants::{CAMERA_TILE_HEIGHT, CAMERA_TILE_WIDTH};
use crate::domain::camera::Camera;
use crate::fixtures;
use crate::i18n::{tr, tr_count, Locale};
use crate::state::feed_image_state::FeedImageState;
use crate::theme::colors::SentinelColors;

/// Camera listing page component
pub struct CamerasPage {
    entities: AppEntities,
}

impl CamerasPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe feed image downloads
        cx.observe(&entities.feed_images, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_camera_row(
        &self,
        camera: &Camera,
        images: &FeedImageState,
        locale: Locale,
    ) -> impl IntoElement {
        let status = camera.status.presentation();
        let details = camera.details;

        div()
            .w_full()
            .p_4()
            .flex()
            .items_center()
            .gap_4()
            .bg(SentinelColors::card_bg())
            .rounded_xl()
            .border_1()
            .border_color(SentinelColors::border())
            .child(
                div()
                    .w(px(CAMERA_TILE_WIDTH))
                    .h(px(CAMERA_TILE_HEIGHT))
                    .flex_none()
                    .rounded_lg()
                    .overflow_hidden()
                    .bg(SentinelColors::feed_bg())
                    .child(FeedImageView::for_source(images, camera.feed_source, locale)),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_lg()
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(SentinelColors::text_primary())
                                    .child(camera.name),
                            )
                            .child(Badge::new(tr(locale, status.badge_key), status.badge)),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_6()
                            .text_sm()
                            .text_color(SentinelColors::text_secondary())
                            .child(tr_count(locale, "feed.people", details.people))
                            .child(tr_count(locale, "feed.vehicles", details.vehicles))
                            .child(tr_count(locale, "feed.alerts", details.alerts))
                            .child(tr_count(locale, "feed.objects", details.objects)),
                    ),
            )
    }
}

impl Render for CamerasPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let cameras = fixtures::cameras();
        let images = self.entities.feed_images.read(cx);

        div()
            .id("cameras-page")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .bg(SentinelColors::background())
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(SentinelColors::text_primary())
                            .child(tr(locale, "cameras.title")),
                    )
                    .child(
                        div()
                            .text_color(SentinelColors::text_secondary())
                            .child(tr_count(locale, "cameras.subtitle", cameras.len() as u32)),
                    ),
            )
            .children(
                cameras
                    .iter()
                    .map(|camera| self.render_camera_row(camera, images, locale)),
            )
    }
}
