//! Workspace - Main Shell with Layout
//!
//! The workspace is the main container that holds the header, sidebar and
//! the page selected by the navigation state.

use gpui::{
    div, prelude::*, AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::features::cameras::page::CamerasPage;
use crate::features::dashboard::page::DashboardPage;
use crate::theme::colors::SentinelColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    // Page views, created on first visit and kept afterwards
    dashboard_page: Option<Entity<DashboardPage>>,
    cameras_page: Option<Entity<CamerasPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        // Dashboard is the landing page
        let dashboard_page = Some(cx.new(|cx| DashboardPage::new(entities.clone(), cx)));

        // Observe navigation for page changes
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            dashboard_page,
            cameras_page: None,
        }
    }

    /// Get or create the view for a route
    fn page_for(&mut self, route: Route, cx: &mut Context<Self>) -> AnyElement {
        let entities = self.entities.clone();
        match route {
            Route::Dashboard => self
                .dashboard_page
                .get_or_insert_with(|| cx.new(|cx| DashboardPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Route::LiveFeed => self
                .cameras_page
                .get_or_insert_with(|| cx.new(|cx| CamerasPage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let route = self.entities.navigation.read(cx).active();
        let content = self.page_for(route, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(SentinelColors::background())
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Main content area
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(
                        // Sidebar
                        self.sidebar.clone(),
                    )
                    .child(
                        // Content
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .child(content),
                    ),
            )
    }
}
