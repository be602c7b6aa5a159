use thiserror::Error;

mod engine;
mod history;
mod route;
mod state;
mod subscriber;

pub use engine::Router;
pub use history::History;
pub use route::{normalize_fragment, split_fragment, Route, RouteParams, RouteSegment};
pub use state::{NavigationState, NavigationToken};
pub use subscriber::NavigationSubscriber;

/// Options accepted by [`Router::navigate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Invoke the matched handler immediately
    pub trigger: bool,
}

impl NavigateOptions {
    pub fn trigger() -> Self {
        Self { trigger: true }
    }

    /// Record the history entry without invoking a handler
    pub fn silent() -> Self {
        Self { trigger: false }
    }
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self::trigger()
    }
}

/// A route selected for a navigation, ready to be handed to its handler
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Name of the handler bound to the route
    pub handler: String,
    /// The pattern that matched
    pub pattern: String,
    /// Decoded path parameters in pattern order
    pub params: RouteParams,
    /// Raw `?query` suffix of the fragment, if any
    pub query_string: Option<String>,
    /// The navigation this match belongs to
    pub state: NavigationState,
    /// Token used to reject this handler's results once superseded
    pub token: NavigationToken,
}

/// Routing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches '{path}'")]
    NotFound { path: String },

    #[error("router has not been started")]
    NotStarted,
}
