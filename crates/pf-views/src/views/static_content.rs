use serde_json::{json, Value};
use uuid::Uuid;

use crate::{MountableView, Region, Template, ViewId, ViewRenderer, ViewScope};

/// Content that needs no fetched data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticPage {
    About,
    Mission,
    Contact,
    /// Fallback for unroutable fragments
    NotFound { path: String },
    /// A fetch or parse failed; `message` is shown to the user
    Failure { message: String },
}

impl StaticPage {
    fn template(&self) -> Template {
        match self {
            StaticPage::About => Template::About,
            StaticPage::Mission => Template::Mission,
            StaticPage::Contact => Template::Contact,
            StaticPage::NotFound { .. } => Template::NotFound,
            StaticPage::Failure { .. } => Template::Failure,
        }
    }

    fn data(&self) -> Value {
        match self {
            StaticPage::NotFound { path } => json!({ "path": path }),
            StaticPage::Failure { message } => json!({ "message": message }),
            _ => json!({}),
        }
    }
}

pub struct StaticContentView {
    id: ViewId,
    page: StaticPage,
    scope: ViewScope,
}

impl StaticContentView {
    pub fn new(page: StaticPage) -> Self {
        Self {
            id: Uuid::new_v4(),
            page,
            scope: ViewScope::new(),
        }
    }

    pub fn page(&self) -> &StaticPage {
        &self.page
    }
}

impl MountableView for StaticContentView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn view_type(&self) -> &'static str {
        match self.page {
            StaticPage::About => "AboutView",
            StaticPage::Mission => "MissionView",
            StaticPage::Contact => "ContactView",
            StaticPage::NotFound { .. } => "NotFoundView",
            StaticPage::Failure { .. } => "FailureView",
        }
    }

    fn mount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        let data = self.page.data();
        self.scope.mount(region, renderer, self.page.template(), &data);
    }

    fn unmount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.scope.release(region, renderer);
    }

    fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }
}
