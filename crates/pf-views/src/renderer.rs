//! Contract with the external renderer that owns markup, widgets and layout

use serde_json::Value;

use crate::Region;

/// Opaque handle to a rendered node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// Opaque handle to a running widget (carousel, map, layout packer...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetHandle(pub u64);

/// Templates the renderer knows how to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Header,
    Footer,
    Search,
    Results,
    ResultItem,
    Park,
    About,
    Mission,
    Contact,
    NotFound,
    Failure,
}

impl Template {
    pub fn id(&self) -> &'static str {
        match self {
            Template::Header => "templates/header.hbs",
            Template::Footer => "templates/footer.hbs",
            Template::Search => "templates/search.hbs",
            Template::Results => "templates/results.hbs",
            Template::ResultItem => "templates/resultItem.hbs",
            Template::Park => "templates/park.hbs",
            Template::About => "templates/about.hbs",
            Template::Mission => "templates/mission.hbs",
            Template::Contact => "templates/contact.hbs",
            Template::NotFound => "templates/notFound.hbs",
            Template::Failure => "templates/failure.hbs",
        }
    }
}

/// How appended list items should be laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Fit the layout to the whole list
    FitAll,
    /// Place only the given items, keeping existing positions
    Append,
}

/// Related-park strips on the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelatedList {
    Orbs,
    Nearby,
    Recommended,
}

/// Widgets with background activity that must be stopped on unmount
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    FeaturedCarousel,
    HeroCarousel,
    ImageCarousel,
    RelatedCarousel(RelatedList),
    Tooltips,
    Map { center: (f64, f64), zoom: u8 },
    Masonry { gutter: u32 },
}

/// Toggleable parts of a rendered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPart {
    Map,
    Carousel,
}

/// Everything the core needs from the markup layer
pub trait ViewRenderer: Send + Sync {
    /// Fill `template` with `data`
    fn render(&self, template: Template, data: &Value) -> NodeHandle;

    /// Attach a rendered node to a region
    fn mount(&self, region: Region, node: NodeHandle);

    /// Detach a node from a region and release its DOM listeners
    fn unmount(&self, region: Region, node: NodeHandle);

    /// Add item nodes to a list node
    fn append_items(&self, parent: NodeHandle, items: &[NodeHandle], layout: LayoutMode);

    /// Swap all item nodes of a list node
    fn replace_items(&self, parent: NodeHandle, items: &[NodeHandle]);

    fn start_widget(&self, node: NodeHandle, widget: WidgetKind) -> WidgetHandle;

    fn stop_widget(&self, widget: WidgetHandle);

    fn set_visible(&self, node: NodeHandle, part: ViewPart, visible: bool);

    /// Recompute a map widget's size after it became visible
    fn invalidate_map(&self, map: WidgetHandle);

    /// Show `message` as an inline notice on `node`, or clear it with `None`
    fn set_notice(&self, node: NodeHandle, message: Option<&str>);

    /// Show or hide the global loading indicator
    fn set_loading(&self, visible: bool);
}
