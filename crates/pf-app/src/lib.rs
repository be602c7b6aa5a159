//! Park finder client controller
//!
//! Wires the router, the park API and the region manager together: each
//! routed navigation runs a handler that fetches what it needs and mounts a
//! view, unless a newer navigation has superseded it in the meantime.

mod app;
mod console_renderer;
mod context;
mod error;
pub mod handlers;

pub use app::ParkFinderApp;
pub use console_renderer::ConsoleRenderer;
pub use context::{AppContext, LoadingIndicator, FAILURE_MESSAGE};
pub use error::{AppError, Result};
