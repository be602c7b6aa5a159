//! Renderer that records every call, for tests

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde_json::Value;

use crate::{
    LayoutMode, NodeHandle, Region, Template, ViewPart, ViewRenderer, WidgetHandle, WidgetKind,
};

/// One renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Render(Template, NodeHandle),
    Mount(Region, NodeHandle),
    Unmount(Region, NodeHandle),
    Append(NodeHandle, Vec<NodeHandle>, LayoutMode),
    Replace(NodeHandle, Vec<NodeHandle>),
    StartWidget(NodeHandle, WidgetKind, WidgetHandle),
    StopWidget(WidgetHandle),
    SetVisible(NodeHandle, ViewPart, bool),
    InvalidateMap(WidgetHandle),
    Notice(NodeHandle, Option<String>),
    Loading(bool),
}

#[derive(Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<RenderCall>>,
    rendered: Mutex<Vec<(Template, Value)>>,
    next_handle: AtomicU64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    /// Data passed to `render`, in call order
    pub fn rendered(&self) -> Vec<(Template, Value)> {
        self.rendered.lock().clone()
    }

    /// Data of the most recent render of `template`
    pub fn last_render_of(&self, template: Template) -> Option<Value> {
        self.rendered
            .lock()
            .iter()
            .rev()
            .find(|(t, _)| *t == template)
            .map(|(_, data)| data.clone())
    }

    /// Widgets started and not yet stopped
    pub fn running_widgets(&self) -> Vec<WidgetHandle> {
        let calls = self.calls.lock();
        let mut running = Vec::new();
        for call in calls.iter() {
            match call {
                RenderCall::StartWidget(_, _, handle) => running.push(*handle),
                RenderCall::StopWidget(handle) => running.retain(|h| h != handle),
                _ => {}
            }
        }
        running
    }

    /// Whether the last loading call showed the indicator
    pub fn loading_visible(&self) -> bool {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::Loading(visible) => Some(*visible),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Notice currently shown on `node`, if any
    pub fn notice_on(&self, node: NodeHandle) -> Option<String> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::Notice(n, message) if *n == node => Some(message.clone()),
                _ => None,
            })
            .flatten()
    }

    fn next(&self) -> u64 {
        self.next_handle.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn record(&self, call: RenderCall) {
        self.calls.lock().push(call);
    }
}

impl ViewRenderer for RecordingRenderer {
    fn render(&self, template: Template, data: &Value) -> NodeHandle {
        let node = NodeHandle(self.next());
        self.rendered.lock().push((template, data.clone()));
        self.record(RenderCall::Render(template, node));
        node
    }

    fn mount(&self, region: Region, node: NodeHandle) {
        self.record(RenderCall::Mount(region, node));
    }

    fn unmount(&self, region: Region, node: NodeHandle) {
        self.record(RenderCall::Unmount(region, node));
    }

    fn append_items(&self, parent: NodeHandle, items: &[NodeHandle], layout: LayoutMode) {
        self.record(RenderCall::Append(parent, items.to_vec(), layout));
    }

    fn replace_items(&self, parent: NodeHandle, items: &[NodeHandle]) {
        self.record(RenderCall::Replace(parent, items.to_vec()));
    }

    fn start_widget(&self, node: NodeHandle, widget: WidgetKind) -> WidgetHandle {
        let handle = WidgetHandle(self.next());
        self.record(RenderCall::StartWidget(node, widget, handle));
        handle
    }

    fn stop_widget(&self, widget: WidgetHandle) {
        self.record(RenderCall::StopWidget(widget));
    }

    fn set_visible(&self, node: NodeHandle, part: ViewPart, visible: bool) {
        self.record(RenderCall::SetVisible(node, part, visible));
    }

    fn invalidate_map(&self, map: WidgetHandle) {
        self.record(RenderCall::InvalidateMap(map));
    }

    fn set_notice(&self, node: NodeHandle, message: Option<&str>) {
        self.record(RenderCall::Notice(node, message.map(str::to_string)));
    }

    fn set_loading(&self, visible: bool) {
        self.record(RenderCall::Loading(visible));
    }
}
