use pf_data::Park;
use uuid::Uuid;

use crate::{
    MountableView, Region, RelatedList, Template, UiEvent, ViewAction, ViewId, ViewPart,
    ViewRenderer, ViewScope, WidgetHandle, WidgetKind,
};

const MAP_CENTER: (f64, f64) = (51.505, -0.09);
const MAP_ZOOM: u8 = 13;

/// Single park page: image carousel, related strips and a map that can be
/// swapped in for the carousel.
pub struct DetailView {
    id: ViewId,
    park: Park,
    show_map: bool,
    map: Option<WidgetHandle>,
    scope: ViewScope,
}

impl DetailView {
    pub fn new(park: Park) -> Self {
        Self {
            id: Uuid::new_v4(),
            park,
            show_map: false,
            map: None,
            scope: ViewScope::new(),
        }
    }

    pub fn park(&self) -> &Park {
        &self.park
    }

    pub fn show_map(&self) -> bool {
        self.show_map
    }

    fn toggle_map(&mut self, renderer: &dyn ViewRenderer) {
        let Some(node) = self.scope.node() else {
            return;
        };
        self.show_map = !self.show_map;
        renderer.set_visible(node, ViewPart::Map, self.show_map);
        renderer.set_visible(node, ViewPart::Carousel, !self.show_map);
        if self.show_map {
            if let Some(map) = self.map {
                renderer.invalidate_map(map);
            }
        }
    }
}

impl MountableView for DetailView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn view_type(&self) -> &'static str {
        "DetailView"
    }

    fn mount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.scope
            .mount(region, renderer, Template::Park, &self.park.to_value());

        self.scope.start_widget(renderer, WidgetKind::ImageCarousel);
        for list in [RelatedList::Orbs, RelatedList::Nearby, RelatedList::Recommended] {
            self.scope
                .start_widget(renderer, WidgetKind::RelatedCarousel(list));
        }
        self.scope.start_widget(renderer, WidgetKind::Tooltips);
        self.map = self.scope.start_widget(
            renderer,
            WidgetKind::Map {
                center: MAP_CENTER,
                zoom: MAP_ZOOM,
            },
        );
        self.show_map = false;
    }

    fn unmount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.scope.release(region, renderer);
        self.map = None;
    }

    fn handle_event(&mut self, renderer: &dyn ViewRenderer, event: &UiEvent) -> Option<ViewAction> {
        if let UiEvent::ToggleMap = event {
            self.toggle_map(renderer);
        }
        None
    }

    fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }
}
