//! Mountable view abstraction shared by every view variant

use pf_data::PageOutcome;
use uuid::Uuid;

use crate::views::{
    DetailView, FooterView, HeaderView, ResultsView, SearchView, StaticContentView,
};
use crate::{NodeHandle, Region, UiEvent, ViewAction, ViewRenderer, WidgetHandle, WidgetKind};

/// Unique identifier for a view instance
pub type ViewId = Uuid;

/// Capability set every view provides to the region manager
pub trait MountableView: Send {
    /// Get the unique ID of this view
    fn id(&self) -> ViewId;

    /// Get the view type (for logging)
    fn view_type(&self) -> &'static str;

    /// Render and attach to `region`, starting any widgets
    fn mount(&mut self, region: Region, renderer: &dyn ViewRenderer);

    /// Stop widgets and detach. Must leave nothing running.
    fn unmount(&mut self, region: Region, renderer: &dyn ViewRenderer);

    /// Apply freshly fetched data to an already mounted view
    fn on_data_ready(&mut self, _renderer: &dyn ViewRenderer, _update: &PageOutcome) {}

    /// React to a user interaction
    fn handle_event(&mut self, _renderer: &dyn ViewRenderer, _event: &UiEvent) -> Option<ViewAction> {
        None
    }

    fn is_mounted(&self) -> bool;
}

/// Resources a mounted view holds: its root node and the widgets started on
/// it. Releasing the scope stops every widget before the node is detached.
#[derive(Debug, Default)]
pub struct ViewScope {
    node: Option<NodeHandle>,
    widgets: Vec<WidgetHandle>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `template`, attach it to `region` and remember the node
    pub fn mount(
        &mut self,
        region: Region,
        renderer: &dyn ViewRenderer,
        template: crate::Template,
        data: &serde_json::Value,
    ) -> NodeHandle {
        let node = renderer.render(template, data);
        renderer.mount(region, node);
        self.node = Some(node);
        node
    }

    pub fn node(&self) -> Option<NodeHandle> {
        self.node
    }

    pub fn is_mounted(&self) -> bool {
        self.node.is_some()
    }

    /// Start a widget on the root node; it is stopped by [`ViewScope::release`]
    pub fn start_widget(
        &mut self,
        renderer: &dyn ViewRenderer,
        widget: WidgetKind,
    ) -> Option<WidgetHandle> {
        let node = self.node?;
        let handle = renderer.start_widget(node, widget);
        self.widgets.push(handle);
        Some(handle)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Stop all widgets (newest first), then detach the node
    pub fn release(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        while let Some(widget) = self.widgets.pop() {
            renderer.stop_widget(widget);
        }
        if let Some(node) = self.node.take() {
            renderer.unmount(region, node);
        }
    }
}

/// The closed set of views the application mounts
pub enum View {
    Header(HeaderView),
    Footer(FooterView),
    Search(SearchView),
    Results(ResultsView),
    Detail(DetailView),
    Static(StaticContentView),
}

impl View {
    fn inner(&self) -> &dyn MountableView {
        match self {
            View::Header(v) => v,
            View::Footer(v) => v,
            View::Search(v) => v,
            View::Results(v) => v,
            View::Detail(v) => v,
            View::Static(v) => v,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn MountableView {
        match self {
            View::Header(v) => v,
            View::Footer(v) => v,
            View::Search(v) => v,
            View::Results(v) => v,
            View::Detail(v) => v,
            View::Static(v) => v,
        }
    }

    pub fn as_results(&self) -> Option<&ResultsView> {
        match self {
            View::Results(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_detail(&self) -> Option<&DetailView> {
        match self {
            View::Detail(v) => Some(v),
            _ => None,
        }
    }
}

impl MountableView for View {
    fn id(&self) -> ViewId {
        self.inner().id()
    }

    fn view_type(&self) -> &'static str {
        self.inner().view_type()
    }

    fn mount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.inner_mut().mount(region, renderer)
    }

    fn unmount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.inner_mut().unmount(region, renderer)
    }

    fn on_data_ready(&mut self, renderer: &dyn ViewRenderer, update: &PageOutcome) {
        self.inner_mut().on_data_ready(renderer, update)
    }

    fn handle_event(&mut self, renderer: &dyn ViewRenderer, event: &UiEvent) -> Option<ViewAction> {
        self.inner_mut().handle_event(renderer, event)
    }

    fn is_mounted(&self) -> bool {
        self.inner().is_mounted()
    }
}

macro_rules! impl_from_view {
    ($($variant:ident => $t:ty),*) => {
        $(
            impl From<$t> for View {
                fn from(view: $t) -> Self {
                    View::$variant(view)
                }
            }
        )*
    }
}

impl_from_view!(
    Header => HeaderView,
    Footer => FooterView,
    Search => SearchView,
    Results => ResultsView,
    Detail => DetailView,
    Static => StaticContentView
);
