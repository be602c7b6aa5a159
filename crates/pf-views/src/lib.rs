//! View system for the park finder client
//!
//! Views are plain state machines over an external [`ViewRenderer`]; they
//! never touch markup themselves. The [`RegionManager`] owns the three screen
//! regions and guarantees a single active view per region.

mod events;
mod regions;
mod renderer;
mod view;
pub mod views;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use events::{NavTarget, UiEvent, ViewAction};
pub use regions::{publish_changes, Region, RegionChange, RegionManager};
pub use renderer::{
    LayoutMode, NodeHandle, RelatedList, Template, ViewPart, ViewRenderer, WidgetHandle, WidgetKind,
};
pub use view::{MountableView, View, ViewId, ViewScope};
pub use views::{
    DetailView, FooterView, HeaderView, ResultsView, SearchView, StaticContentView, StaticPage,
};
