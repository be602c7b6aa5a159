//! Router implementation

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::route::{normalize_fragment, split_fragment};
use super::{
    History, NavigateOptions, NavigationState, NavigationSubscriber, NavigationToken, Route,
    RouteError, RouteMatch,
};

/// Maps URL fragments to named handlers and tracks which navigation is active.
///
/// Routes are tried in registration order and the first match wins. Every
/// routed navigation advances the active sequence number, which makes the
/// tokens handed to earlier handlers stale.
pub struct Router {
    routes: Vec<Route>,
    history: RwLock<History>,
    clock: AtomicU64,
    active: Arc<AtomicU64>,
    started: AtomicBool,
    subscribers: RwLock<Vec<Weak<dyn NavigationSubscriber>>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            history: RwLock::new(History::new()),
            clock: AtomicU64::new(0),
            active: Arc::new(AtomicU64::new(0)),
            started: AtomicBool::new(false),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Register a route; earlier registrations take precedence
    pub fn register(&mut self, route: Route) {
        debug!("Registering route '{}' -> {}", route.pattern(), route.handler());
        self.routes.push(route);
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route the initial URL
    pub fn start(&self, initial_path: &str) -> Result<RouteMatch, RouteError> {
        self.started.store(true, Ordering::Release);
        let fragment = normalize_fragment(initial_path);
        info!("Starting router at '{}'", fragment);

        let state = self.record(fragment);
        self.history.write().push(state.clone());
        self.load(state)
    }

    /// Push `path` onto history and, with `trigger`, return the matched route
    /// so its handler can run. Navigating to the current fragment does nothing.
    pub fn navigate(
        &self,
        path: &str,
        options: NavigateOptions,
    ) -> Result<Option<RouteMatch>, RouteError> {
        if !self.started.load(Ordering::Acquire) {
            return Err(RouteError::NotStarted);
        }

        let fragment = normalize_fragment(path);
        let unchanged = self
            .history
            .read()
            .current()
            .map(|current| current.fragment() == fragment)
            .unwrap_or(false);
        if unchanged {
            debug!("Ignoring navigation to current fragment '{}'", fragment);
            return Ok(None);
        }

        let state = self.record(fragment);
        self.history.write().push(state.clone());

        if !options.trigger {
            debug!("Recorded '{}' without triggering a handler", fragment);
            return Ok(None);
        }

        self.load(state).map(Some)
    }

    /// Step back one history entry and route it again
    pub fn back(&self) -> Result<Option<RouteMatch>, RouteError> {
        let previous = self.history.write().back().cloned();
        self.reload(previous)
    }

    /// Step forward one history entry and route it again
    pub fn forward(&self) -> Result<Option<RouteMatch>, RouteError> {
        let next = self.history.write().forward().cloned();
        self.reload(next)
    }

    /// The navigation under the history cursor
    pub fn current(&self) -> Option<NavigationState> {
        self.history.read().current().cloned()
    }

    /// Sequence number of the active routed navigation
    pub fn active_seq(&self) -> u64 {
        self.active.load(Ordering::Acquire)
    }

    /// Token for follow-up work issued on behalf of the active navigation
    pub fn active_token(&self) -> NavigationToken {
        NavigationToken::new(self.active_seq(), self.active.clone())
    }

    pub fn history_len(&self) -> usize {
        self.history.read().len()
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    fn reload(&self, entry: Option<NavigationState>) -> Result<Option<RouteMatch>, RouteError> {
        let Some(entry) = entry else {
            return Ok(None);
        };

        let state = self.record(&entry.fragment());
        self.history.write().replace_current(state.clone());
        self.load(state).map(Some)
    }

    fn record(&self, fragment: &str) -> NavigationState {
        let (path, query) = split_fragment(fragment);
        let timestamp = self.clock.fetch_add(1, Ordering::AcqRel) + 1;
        NavigationState::new(path, query, timestamp)
    }

    fn load(&self, state: NavigationState) -> Result<RouteMatch, RouteError> {
        // Activate before matching so pending work is superseded even when
        // the new fragment turns out to be unroutable.
        self.active.store(state.timestamp(), Ordering::Release);
        let token = NavigationToken::new(state.timestamp(), self.active.clone());

        let matched = self.routes.iter().find_map(|route| {
            route
                .match_path(state.path())
                .map(|params| (route, params))
        });

        let Some((route, params)) = matched else {
            warn!("No route matches '{}'", state.fragment());
            self.notify(|subscriber| subscriber.on_route_not_found(&state));
            return Err(RouteError::NotFound {
                path: state.fragment(),
            });
        };

        let query_string = if state.query_string().is_empty() {
            None
        } else {
            Some(state.query_string().to_string())
        };

        let route_match = RouteMatch {
            handler: route.handler().to_string(),
            pattern: route.pattern().to_string(),
            params,
            query_string,
            state,
            token,
        };

        info!(
            "Routed '{}' to {} (navigation #{})",
            route_match.state.fragment(),
            route_match.handler,
            route_match.token.seq()
        );
        self.notify(|subscriber| subscriber.on_route(&route_match));
        Ok(route_match)
    }

    fn notify(&self, f: impl Fn(&dyn NavigationSubscriber)) {
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                f(subscriber.as_ref());
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
