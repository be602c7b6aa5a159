//! Shared application state, built once at start-up

use std::sync::Arc;

use parking_lot::Mutex;
use pf_core::events::events::{FetchFailed, StaleResponseDiscarded};
use pf_core::{EventBus, FetchAdapter, NavigationSubscriber, NavigationToken, RouteMatch, Router};
use pf_data::{AppConfig, DataError, ParkApi, ParksCollection};
use pf_views::{
    publish_changes, MountableView, Region, RegionManager, StaticContentView, StaticPage, View,
    ViewRenderer,
};
use tracing::{debug, error};

use crate::handlers;

/// Message shown by the failure view for fetch and parse errors
pub const FAILURE_MESSAGE: &str = "no data for that search!";

/// Shows the loading indicator whenever a route handler is about to run
pub struct LoadingIndicator {
    renderer: Arc<dyn ViewRenderer>,
}

impl NavigationSubscriber for LoadingIndicator {
    fn on_route(&self, _route: &RouteMatch) {
        self.renderer.set_loading(true);
    }
}

/// Everything the route handlers share
pub struct AppContext {
    pub config: AppConfig,
    pub api: ParkApi,
    pub router: Router,
    pub regions: Mutex<RegionManager>,
    pub events: Arc<EventBus>,
    pub renderer: Arc<dyn ViewRenderer>,

    /// Collection behind the mounted results view
    pub(crate) collection: Mutex<Option<Arc<ParksCollection>>>,

    // The router only keeps a weak reference
    _loading: Arc<LoadingIndicator>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        fetcher: Arc<dyn FetchAdapter>,
        renderer: Arc<dyn ViewRenderer>,
    ) -> Self {
        let events = Arc::new(EventBus::new());
        let api = ParkApi::new(fetcher, config.api.clone());

        let mut router = Router::new();
        for route in handlers::routes() {
            router.register(route);
        }

        let loading = Arc::new(LoadingIndicator {
            renderer: renderer.clone(),
        });
        router.add_subscriber(loading.clone());

        Self {
            config,
            api,
            router,
            regions: Mutex::new(RegionManager::new(renderer.clone())),
            events,
            renderer,
            collection: Mutex::new(None),
            _loading: loading,
        }
    }

    /// Replace the main view and hide the loading indicator. Leaving the
    /// results page drops its collection.
    pub fn show_main(&self, view: impl Into<View>) {
        let view = view.into();
        if !matches!(view, View::Results(_)) {
            self.collection.lock().take();
        }
        self.show(Region::Main, view);
        self.renderer.set_loading(false);
    }

    /// Mount `view` in `region`. Mount events are published after the region
    /// lock is released, so subscribers may inspect the regions.
    pub fn show(&self, region: Region, view: impl Into<View>) {
        let changes = self.regions.lock().show(region, view);
        publish_changes(changes, &self.events);
    }

    /// Type name of the view in `region`
    pub fn active_view_type(&self, region: Region) -> Option<&'static str> {
        self.regions.lock().active(region).map(|view| view.view_type())
    }

    /// Whether work issued under `token` may still touch the screen.
    /// Stale results are logged and published, never shown.
    pub(crate) fn still_current(&self, token: &NavigationToken, context: &str) -> bool {
        if token.is_current() {
            return true;
        }
        debug!(
            "Discarding stale {} response (navigation #{}, active #{})",
            context,
            token.seq(),
            token.active_seq()
        );
        self.events.publish(StaleResponseDiscarded {
            context: context.to_string(),
            issued_seq: token.seq(),
            active_seq: token.active_seq(),
        });
        false
    }

    /// Log a failed fetch and publish it
    pub(crate) fn report_failure(&self, context: &'static str, error: &DataError) {
        error!("{} failed: {}", context, error);
        self.events.publish(FetchFailed {
            context: context.to_string(),
            error: error.to_string(),
        });
    }

    /// Report a failed fetch and mount the failure view in its place
    pub(crate) fn show_failure(&self, context: &'static str, error: &DataError) {
        self.report_failure(context, error);
        self.show_main(StaticContentView::new(StaticPage::Failure {
            message: FAILURE_MESSAGE.to_string(),
        }));
    }
}
