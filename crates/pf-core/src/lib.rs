//! Core functionality for the park finder client
//!
//! This crate provides URL routing, navigation state tracking, the event bus
//! and the fetch boundary shared by the data, view and application crates.

pub mod data;
pub mod events;
pub mod navigation;

// Re-export commonly used types
pub use data::{FetchAdapter, FetchError};
pub use events::EventBus;
pub use navigation::{
    NavigateOptions, NavigationState, NavigationSubscriber, NavigationToken,
    Route, RouteError, RouteMatch, RouteParams, Router,
};
