use serde_json::json;
use uuid::Uuid;

use crate::{
    MountableView, Region, Template, UiEvent, ViewAction, ViewId, ViewRenderer, ViewScope,
};

/// Site header with the top navigation links
pub struct HeaderView {
    id: ViewId,
    scope: ViewScope,
}

impl HeaderView {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            scope: ViewScope::new(),
        }
    }
}

impl Default for HeaderView {
    fn default() -> Self {
        Self::new()
    }
}

impl MountableView for HeaderView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn view_type(&self) -> &'static str {
        "HeaderView"
    }

    fn mount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.scope.mount(region, renderer, Template::Header, &json!({}));
    }

    fn unmount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.scope.release(region, renderer);
    }

    fn handle_event(&mut self, _renderer: &dyn ViewRenderer, event: &UiEvent) -> Option<ViewAction> {
        match event {
            UiEvent::Nav(target) if self.scope.is_mounted() => {
                Some(ViewAction::Navigate(target.fragment().to_string()))
            }
            _ => None,
        }
    }

    fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }
}
