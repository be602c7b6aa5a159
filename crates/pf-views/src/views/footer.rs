use serde_json::json;
use uuid::Uuid;

use crate::{MountableView, Region, Template, ViewId, ViewRenderer, ViewScope};

pub struct FooterView {
    id: ViewId,
    scope: ViewScope,
}

impl FooterView {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            scope: ViewScope::new(),
        }
    }
}

impl Default for FooterView {
    fn default() -> Self {
        Self::new()
    }
}

impl MountableView for FooterView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn view_type(&self) -> &'static str {
        "FooterView"
    }

    fn mount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.scope.mount(region, renderer, Template::Footer, &json!({}));
    }

    fn unmount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.scope.release(region, renderer);
    }

    fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }
}
