//! Application controller

use std::sync::Arc;

use pf_core::events::events::PageLoaded;
use pf_core::{FetchAdapter, NavigateOptions, RouteError, RouteMatch};
use pf_data::{AppConfig, PageOutcome, ParksCollection, SkipReason};
use pf_views::{
    FooterView, HeaderView, MountableView, Region, ResultsView, UiEvent, View, ViewAction,
    ViewRenderer,
};
use tracing::{debug, info};

use crate::context::{AppContext, FAILURE_MESSAGE};
use crate::error::{AppError, Result};
use crate::handlers;

#[derive(Debug, Clone, Copy)]
enum PageDirection {
    Next,
    Previous,
}

/// The park finder client. Cheap to clone; clones share one [`AppContext`].
#[derive(Clone)]
pub struct ParkFinderApp {
    ctx: Arc<AppContext>,
}

impl ParkFinderApp {
    pub fn new(
        config: AppConfig,
        fetcher: Arc<dyn FetchAdapter>,
        renderer: Arc<dyn ViewRenderer>,
    ) -> Self {
        Self {
            ctx: Arc::new(AppContext::new(config, fetcher, renderer)),
        }
    }

    pub fn context(&self) -> &Arc<AppContext> {
        &self.ctx
    }

    /// Mount the header and footer, then route `initial_path`
    pub async fn start(&self, initial_path: &str) -> Result<()> {
        self.ctx.show(Region::Nav, HeaderView::new());
        self.ctx.show(Region::Footer, FooterView::new());

        match self.ctx.router.start(initial_path) {
            Ok(route) => self.dispatch(route).await,
            Err(RouteError::NotFound { path }) => {
                handlers::not_found(&self.ctx, &path);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Record a navigation and return the route to dispatch, if any.
    /// Unroutable fragments mount the not-found view here.
    pub fn navigate(&self, path: &str, options: NavigateOptions) -> Result<Option<RouteMatch>> {
        match self.ctx.router.navigate(path, options) {
            Ok(route) => Ok(route),
            Err(RouteError::NotFound { path }) => {
                handlers::not_found(&self.ctx, &path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Run the handler for a route returned by [`ParkFinderApp::navigate`]
    pub async fn dispatch(&self, route: RouteMatch) -> Result<()> {
        handlers::dispatch(&self.ctx, route).await
    }

    /// Navigate to `path` and run its handler to completion
    pub async fn visit(&self, path: &str) -> Result<()> {
        match self.navigate(path, NavigateOptions::trigger())? {
            Some(route) => self.dispatch(route).await,
            None => Ok(()),
        }
    }

    /// Step back through history and re-run the handler
    pub async fn back(&self) -> Result<()> {
        self.reroute(self.ctx.router.back()).await
    }

    pub async fn forward(&self) -> Result<()> {
        self.reroute(self.ctx.router.forward()).await
    }

    async fn reroute(
        &self,
        routed: std::result::Result<Option<RouteMatch>, RouteError>,
    ) -> Result<()> {
        match routed {
            Ok(Some(route)) => self.dispatch(route).await,
            Ok(None) => Ok(()),
            Err(RouteError::NotFound { path }) => {
                handlers::not_found(&self.ctx, &path);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Route a user interaction to the active views and carry out what they ask
    pub async fn handle_ui_event(&self, event: UiEvent) -> Result<()> {
        let actions = self.ctx.regions.lock().dispatch(&event);
        for action in actions {
            match action {
                ViewAction::Navigate(path) => self.visit(&path).await?,
                ViewAction::FetchNextPage => {
                    self.next_page().await?;
                }
                ViewAction::FetchPreviousPage => {
                    self.previous_page().await?;
                }
            }
        }
        Ok(())
    }

    /// Append the next results page to the mounted results view.
    ///
    /// Returns `None` when the response arrived after the results view was
    /// replaced or another navigation started.
    pub async fn next_page(&self) -> Result<Option<PageOutcome>> {
        self.change_page(PageDirection::Next).await
    }

    /// Replace the mounted results with the previous page
    pub async fn previous_page(&self) -> Result<Option<PageOutcome>> {
        self.change_page(PageDirection::Previous).await
    }

    async fn change_page(&self, direction: PageDirection) -> Result<Option<PageOutcome>> {
        let Some(collection) = self.ctx.collection.lock().clone() else {
            return Ok(Some(PageOutcome::Skipped(SkipReason::NotLoaded)));
        };
        let token = self.ctx.router.active_token();

        let fetched = match direction {
            PageDirection::Next => collection.fetch_next_page().await,
            PageDirection::Previous => collection.fetch_previous_page().await,
        };
        if !self.ctx.still_current(&token, handlers::RESULTS) {
            return Ok(None);
        }

        let outcome = match fetched {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("{:?} page fetch failed", direction);
                self.ctx.report_failure(handlers::RESULTS, &e);
                self.with_current_results(&collection, |view, renderer| {
                    view.page_failed(renderer, FAILURE_MESSAGE)
                });
                return Err(AppError::data(handlers::RESULTS, e));
            }
        };
        if let PageOutcome::Skipped(reason) = &outcome {
            debug!("{:?} page skipped: {:?}", direction, reason);
            return Ok(Some(outcome));
        }

        let shown = self.with_current_results(&collection, |view, renderer| {
            view.on_data_ready(renderer, &outcome);
            view.set_total_pages(collection.total_pages());
        });
        if shown.is_none() {
            return Ok(None);
        }

        info!(
            "Showing page {}/{} ({} parks)",
            collection.current_page(),
            collection.total_pages(),
            collection.len()
        );
        self.ctx.events.publish(PageLoaded {
            page: collection.current_page(),
            total_pages: collection.total_pages(),
            item_count: collection.len(),
        });
        Ok(Some(outcome))
    }

    /// Run `f` against the mounted results view if it still shows `collection`
    fn with_current_results<R>(
        &self,
        collection: &ParksCollection,
        f: impl FnOnce(&mut ResultsView, &dyn ViewRenderer) -> R,
    ) -> Option<R> {
        let mut regions = self.ctx.regions.lock();
        let Some(View::Results(view)) = regions.active_mut(Region::Main) else {
            debug!("Results view no longer mounted, dropping page");
            return None;
        };
        if view.collection_id() != collection.id() {
            debug!("Results view shows another collection, dropping page");
            return None;
        }
        Some(f(view, self.ctx.renderer.as_ref()))
    }

    /// Type name of the view in `region`
    pub fn active_view_type(&self, region: Region) -> Option<&'static str> {
        self.ctx.active_view_type(region)
    }

    /// Run `f` against the view mounted in `region`
    pub fn with_view<R>(&self, region: Region, f: impl FnOnce(&View) -> R) -> Option<R> {
        self.ctx.regions.lock().active(region).map(f)
    }
}
