//! Renderer that narrates every call through `tracing`

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;
use tracing::info;

use pf_views::{
    LayoutMode, NodeHandle, Region, Template, ViewPart, ViewRenderer, WidgetHandle, WidgetKind,
};

/// Headless renderer for the command-line client
#[derive(Default)]
pub struct ConsoleRenderer {
    next_handle: AtomicU64,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> u64 {
        self.next_handle.fetch_add(1, Ordering::Relaxed) + 1
    }
}

fn summarize(data: &Value) -> String {
    match data {
        Value::Object(map) => {
            for key in ["title", "name", "message", "path"] {
                if let Some(Value::String(text)) = map.get(key) {
                    return text.clone();
                }
            }
            format!("{} fields", map.len())
        }
        other => other.to_string(),
    }
}

impl ViewRenderer for ConsoleRenderer {
    fn render(&self, template: Template, data: &Value) -> NodeHandle {
        let node = NodeHandle(self.next());
        info!("render {} -> #{} ({})", template.id(), node.0, summarize(data));
        node
    }

    fn mount(&self, region: Region, node: NodeHandle) {
        info!("mount #{} in {}", node.0, region.name());
    }

    fn unmount(&self, region: Region, node: NodeHandle) {
        info!("unmount #{} from {}", node.0, region.name());
    }

    fn append_items(&self, parent: NodeHandle, items: &[NodeHandle], layout: LayoutMode) {
        info!("append {} items to #{} ({:?})", items.len(), parent.0, layout);
    }

    fn replace_items(&self, parent: NodeHandle, items: &[NodeHandle]) {
        info!("replace items of #{} with {}", parent.0, items.len());
    }

    fn start_widget(&self, node: NodeHandle, widget: WidgetKind) -> WidgetHandle {
        let handle = WidgetHandle(self.next());
        info!("start {:?} on #{} -> widget {}", widget, node.0, handle.0);
        handle
    }

    fn stop_widget(&self, widget: WidgetHandle) {
        info!("stop widget {}", widget.0);
    }

    fn set_visible(&self, node: NodeHandle, part: ViewPart, visible: bool) {
        info!("#{} {:?} visible={}", node.0, part, visible);
    }

    fn invalidate_map(&self, map: WidgetHandle) {
        info!("invalidate map size of widget {}", map.0);
    }

    fn set_notice(&self, node: NodeHandle, message: Option<&str>) {
        match message {
            Some(message) => info!("notice on #{}: {}", node.0, message),
            None => info!("clear notice on #{}", node.0),
        }
    }

    fn set_loading(&self, visible: bool) {
        info!("loading indicator {}", if visible { "on" } else { "off" });
    }
}
