//! Navigation subscriber trait

use super::{NavigationState, RouteMatch};

/// Trait for components that need to respond to routed navigations
pub trait NavigationSubscriber: Send + Sync {
    /// Called after a route has been matched, before its handler runs
    fn on_route(&self, route: &RouteMatch);

    /// Called when a navigation matched no route
    fn on_route_not_found(&self, _state: &NavigationState) {}
}
