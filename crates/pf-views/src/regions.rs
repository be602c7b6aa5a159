//! Region manager - owns the views mounted in each screen region

use std::collections::HashMap;
use std::sync::Arc;

use pf_core::events::events::{ViewMounted, ViewUnmounted};
use pf_core::EventBus;
use tracing::{debug, info};

use crate::{MountableView, UiEvent, View, ViewAction, ViewRenderer};

/// Named screen areas a view can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Nav,
    Main,
    Footer,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Nav, Region::Main, Region::Footer];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Nav => "nav",
            Region::Main => "main",
            Region::Footer => "footer",
        }
    }
}

/// A mount or unmount performed by the [`RegionManager`].
///
/// Changes are returned rather than published so the caller can release its
/// hold on the manager before event handlers run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionChange {
    Mounted {
        region: Region,
        view_type: &'static str,
    },
    Unmounted {
        region: Region,
        view_type: &'static str,
    },
}

impl RegionChange {
    pub fn publish(&self, events: &EventBus) {
        match *self {
            RegionChange::Mounted { region, view_type } => events.publish(ViewMounted {
                region: region.name().to_string(),
                view_type: view_type.to_string(),
            }),
            RegionChange::Unmounted { region, view_type } => events.publish(ViewUnmounted {
                region: region.name().to_string(),
                view_type: view_type.to_string(),
            }),
        }
    }
}

/// Publish `changes` in order
pub fn publish_changes(changes: impl IntoIterator<Item = RegionChange>, events: &EventBus) {
    for change in changes {
        change.publish(events);
    }
}

/// Holds at most one active view per region. Showing a view first tears down
/// whatever the region held, so stale widgets never outlive their view.
pub struct RegionManager {
    renderer: Arc<dyn ViewRenderer>,
    active: HashMap<Region, View>,
}

impl RegionManager {
    pub fn new(renderer: Arc<dyn ViewRenderer>) -> Self {
        Self {
            renderer,
            active: HashMap::new(),
        }
    }

    pub fn renderer(&self) -> &Arc<dyn ViewRenderer> {
        &self.renderer
    }

    /// Replace the view in `region`: unmount the old one, then mount `view`
    #[must_use = "region changes should be published"]
    pub fn show(&mut self, region: Region, view: impl Into<View>) -> Vec<RegionChange> {
        let mut changes: Vec<RegionChange> = self.close(region).into_iter().collect();

        let mut view = view.into();
        view.mount(region, self.renderer.as_ref());
        info!("Mounted {} in {} region", view.view_type(), region.name());

        changes.push(RegionChange::Mounted {
            region,
            view_type: view.view_type(),
        });
        self.active.insert(region, view);
        changes
    }

    /// Tear down the view in `region`, if any
    #[must_use = "region changes should be published"]
    pub fn close(&mut self, region: Region) -> Option<RegionChange> {
        let mut previous = self.active.remove(&region)?;
        previous.unmount(region, self.renderer.as_ref());
        debug!("Unmounted {} from {} region", previous.view_type(), region.name());

        Some(RegionChange::Unmounted {
            region,
            view_type: previous.view_type(),
        })
    }

    pub fn active(&self, region: Region) -> Option<&View> {
        self.active.get(&region)
    }

    pub fn active_mut(&mut self, region: Region) -> Option<&mut View> {
        self.active.get_mut(&region)
    }

    /// Offer a UI event to every active view and collect what they ask for
    pub fn dispatch(&mut self, event: &UiEvent) -> Vec<ViewAction> {
        let mut actions = Vec::new();
        for region in Region::ALL {
            if let Some(view) = self.active.get_mut(&region) {
                if let Some(action) = view.handle_event(self.renderer.as_ref(), event) {
                    actions.push(action);
                }
            }
        }
        actions
    }
}
