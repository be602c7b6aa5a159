use pf_data::{CollectionId, CollectionSnapshot, PageOutcome, Park};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::{
    LayoutMode, MountableView, NodeHandle, Region, Template, UiEvent, ViewAction, ViewId,
    ViewRenderer, ViewScope, WidgetKind,
};

const MASONRY_GUTTER: u32 = 10;

/// Result list for one search, laid out in a masonry grid.
///
/// The first layout fits the grid to every item; later appends only place
/// the new items so existing tiles keep their positions.
pub struct ResultsView {
    id: ViewId,
    collection_id: CollectionId,
    pending: Vec<Park>,
    item_nodes: Vec<NodeHandle>,
    initialized: bool,
    current_page: u32,
    total_pages: u32,
    page_error: Option<String>,
    scope: ViewScope,
}

impl ResultsView {
    pub fn new(snapshot: &CollectionSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            collection_id: snapshot.id,
            pending: snapshot.items.clone(),
            item_nodes: Vec::new(),
            initialized: false,
            current_page: snapshot.current_page,
            total_pages: snapshot.total_pages,
            page_error: None,
            scope: ViewScope::new(),
        }
    }

    /// Collection this view displays
    pub fn collection_id(&self) -> CollectionId {
        self.collection_id
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn item_count(&self) -> usize {
        if self.scope.is_mounted() {
            self.item_nodes.len()
        } else {
            self.pending.len()
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Keep the paginator bounds in step with the collection
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
    }

    fn render_items(renderer: &dyn ViewRenderer, parks: &[Park]) -> Vec<NodeHandle> {
        parks
            .iter()
            .map(|park| renderer.render(Template::ResultItem, &park.to_value()))
            .collect()
    }

    /// Message of the last failed page request, until a page loads
    pub fn page_error(&self) -> Option<&str> {
        self.page_error.as_deref()
    }

    /// A page request failed. The shown items and page cursor stay as they
    /// were and the paginator gets an inline notice.
    pub fn page_failed(&mut self, renderer: &dyn ViewRenderer, message: &str) {
        if let Some(list) = self.scope.node() {
            renderer.set_notice(list, Some(message));
        }
        self.page_error = Some(message.to_string());
    }

    fn clear_page_error(&mut self, renderer: &dyn ViewRenderer, list: NodeHandle) {
        if self.page_error.take().is_some() {
            renderer.set_notice(list, None);
        }
    }
}

impl MountableView for ResultsView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn view_type(&self) -> &'static str {
        "ResultsView"
    }

    fn mount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        let shell = json!({
            "current_page": self.current_page,
            "total_pages": self.total_pages,
            "has_previous": self.current_page > 1,
            "has_next": self.current_page < self.total_pages,
        });
        let list = self.scope.mount(region, renderer, Template::Results, &shell);

        let parks = std::mem::take(&mut self.pending);
        let nodes = Self::render_items(renderer, &parks);
        renderer.append_items(list, &nodes, LayoutMode::FitAll);
        self.item_nodes = nodes;

        self.scope
            .start_widget(renderer, WidgetKind::Masonry { gutter: MASONRY_GUTTER });
        self.initialized = true;
    }

    fn unmount(&mut self, region: Region, renderer: &dyn ViewRenderer) {
        self.scope.release(region, renderer);
        self.item_nodes.clear();
        self.page_error = None;
    }

    fn on_data_ready(&mut self, renderer: &dyn ViewRenderer, update: &PageOutcome) {
        let Some(list) = self.scope.node() else {
            match update {
                PageOutcome::Appended { page, new_items } => {
                    self.pending.extend(new_items.iter().cloned());
                    self.current_page = *page;
                }
                PageOutcome::Replaced { page, items } => {
                    self.pending = items.clone();
                    self.current_page = *page;
                }
                PageOutcome::Skipped(_) => {}
            }
            return;
        };

        if !matches!(update, PageOutcome::Skipped(_)) {
            self.clear_page_error(renderer, list);
        }

        match update {
            PageOutcome::Appended { page, new_items } => {
                let nodes = Self::render_items(renderer, new_items);
                renderer.append_items(list, &nodes, LayoutMode::Append);
                self.item_nodes.extend(nodes);
                self.current_page = *page;
            }
            PageOutcome::Replaced { page, items } => {
                let nodes = Self::render_items(renderer, items);
                renderer.replace_items(list, &nodes);
                self.item_nodes = nodes;
                self.current_page = *page;
            }
            PageOutcome::Skipped(reason) => {
                debug!("Results page request skipped: {:?}", reason);
            }
        }
        self.total_pages = self.total_pages.max(self.current_page);
    }

    fn handle_event(&mut self, _renderer: &dyn ViewRenderer, event: &UiEvent) -> Option<ViewAction> {
        if !self.scope.is_mounted() {
            return None;
        }
        match event {
            UiEvent::NextPage => Some(ViewAction::FetchNextPage),
            UiEvent::PreviousPage => Some(ViewAction::FetchPreviousPage),
            _ => None,
        }
    }

    fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingRenderer, RenderCall};
    use indexmap::IndexMap;
    use pf_data::SkipReason;

    fn park(slug: &str) -> Park {
        let mut attrs = IndexMap::new();
        attrs.insert("title".to_string(), json!(slug.to_uppercase()));
        Park::from_attributes(slug, attrs)
    }

    fn snapshot(slugs: &[&str], current: u32, total: u32) -> CollectionSnapshot {
        CollectionSnapshot {
            id: Uuid::new_v4(),
            query_string: "no_map=true".into(),
            items: slugs.iter().map(|s| park(s)).collect(),
            current_page: current,
            total_pages: total,
            fetch_in_flight: false,
        }
    }

    fn appends(renderer: &RecordingRenderer) -> Vec<(usize, LayoutMode)> {
        renderer
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                RenderCall::Append(_, items, layout) => Some((items.len(), layout)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_first_layout_fits_then_appends_incrementally() {
        let renderer = RecordingRenderer::new();
        let mut view = ResultsView::new(&snapshot(&["a", "b"], 1, 3));
        assert!(!view.is_initialized());

        view.mount(Region::Main, &renderer);
        assert!(view.is_initialized());
        assert_eq!(view.item_count(), 2);

        view.on_data_ready(
            &renderer,
            &PageOutcome::Appended {
                page: 2,
                new_items: vec![park("c")],
            },
        );

        assert_eq!(
            appends(&renderer),
            vec![(2, LayoutMode::FitAll), (1, LayoutMode::Append)]
        );
        assert_eq!(view.item_count(), 3);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_replace_swaps_items() {
        let renderer = RecordingRenderer::new();
        let mut view = ResultsView::new(&snapshot(&["a", "b", "c"], 2, 2));
        view.mount(Region::Main, &renderer);

        view.on_data_ready(
            &renderer,
            &PageOutcome::Replaced {
                page: 1,
                items: vec![park("x")],
            },
        );

        let replaced = renderer
            .calls()
            .into_iter()
            .find_map(|call| match call {
                RenderCall::Replace(_, items) => Some(items.len()),
                _ => None,
            });
        assert_eq!(replaced, Some(1));
        assert_eq!(view.item_count(), 1);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_skipped_changes_nothing() {
        let renderer = RecordingRenderer::new();
        let mut view = ResultsView::new(&snapshot(&["a"], 1, 1));
        view.mount(Region::Main, &renderer);
        let before = renderer.calls().len();

        view.on_data_ready(&renderer, &PageOutcome::Skipped(SkipReason::Exhausted));
        assert_eq!(renderer.calls().len(), before);
        assert_eq!(view.item_count(), 1);
    }

    #[test]
    fn test_failed_page_shows_notice_until_next_page_loads() {
        let renderer = RecordingRenderer::new();
        let mut view = ResultsView::new(&snapshot(&["a", "b"], 1, 3));
        view.mount(Region::Main, &renderer);
        let list = view.scope.node().unwrap();

        view.page_failed(&renderer, "no data for that search!");
        assert_eq!(view.page_error(), Some("no data for that search!"));
        assert_eq!(
            renderer.notice_on(list).as_deref(),
            Some("no data for that search!")
        );
        assert_eq!(view.item_count(), 2);
        assert_eq!(view.current_page(), 1);

        view.on_data_ready(&renderer, &PageOutcome::Skipped(SkipReason::Exhausted));
        assert!(view.page_error().is_some());

        view.on_data_ready(
            &renderer,
            &PageOutcome::Appended {
                page: 2,
                new_items: vec![park("c")],
            },
        );
        assert_eq!(view.page_error(), None);
        assert_eq!(renderer.notice_on(list), None);
        assert_eq!(view.item_count(), 3);
    }

    #[test]
    fn test_paginator_events_and_masonry_teardown() {
        let renderer = RecordingRenderer::new();
        let mut view = ResultsView::new(&snapshot(&["a"], 1, 2));
        assert_eq!(view.handle_event(&renderer, &UiEvent::NextPage), None);

        view.mount(Region::Main, &renderer);
        assert_eq!(
            view.handle_event(&renderer, &UiEvent::NextPage),
            Some(ViewAction::FetchNextPage)
        );
        assert_eq!(
            view.handle_event(&renderer, &UiEvent::PreviousPage),
            Some(ViewAction::FetchPreviousPage)
        );
        assert_eq!(renderer.running_widgets().len(), 1);

        view.unmount(Region::Main, &renderer);
        assert!(renderer.running_widgets().is_empty());
        assert!(!view.is_mounted());
    }
}
