use pf_data::{FilterProfile, SearchOptions};
use uuid::Uuid;

use crate::{
    MountableView, Region, Template, UiEvent, ViewAction, ViewId, ViewRenderer, ViewScope,
    WidgetKind,
};

/// Home page: filter form plus featured parks and hero images
pub struct SearchView {
    id: ViewId,
    options: SearchOptions,
    profile: FilterProfile,
    scope: ViewScope,
}

impl SearchView {
    pub fn new(options: SearchOptions, profile: FilterProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            options,
            profile,
            scope: ViewScope::new(),
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}

impl MountableView for SearchView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn view_type(&self) -> &'static str {
        "SearchView"
    }

    fn mount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        let data = serde_json::to_value(&self.options).unwrap_or_default();
        self.scope.mount(region, renderer, Template::Search, &data);
        self.scope.start_widget(renderer, WidgetKind::FeaturedCarousel);
        self.scope.start_widget(renderer, WidgetKind::HeroCarousel);
    }

    fn unmount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.scope.release(region, renderer);
    }

    fn handle_event(&mut self, _renderer: &dyn ViewRenderer, event: &UiEvent) -> Option<ViewAction> {
        match event {
            UiEvent::SearchSubmitted(filters) if self.scope.is_mounted() => {
                Some(ViewAction::Navigate(filters.results_fragment(&self.profile)))
            }
            _ => None,
        }
    }

    fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }
}
