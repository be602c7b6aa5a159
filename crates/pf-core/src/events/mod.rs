use std::sync::Arc;
use parking_lot::Mutex;
use ahash::AHashMap;

/// Application-wide event bus used to observe the controller
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<std::any::TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Controller events
pub mod events {
    use super::Event;

    /// A main-region handler started for a routed navigation
    #[derive(Debug, Clone)]
    pub struct RouteChanged {
        pub handler: String,
        pub fragment: String,
        pub seq: u64,
    }

    /// A navigation matched no registered route
    #[derive(Debug, Clone)]
    pub struct RouteNotFound {
        pub path: String,
    }

    /// A completed fetch was dropped because its navigation was superseded
    #[derive(Debug, Clone)]
    pub struct StaleResponseDiscarded {
        pub context: String,
        pub issued_seq: u64,
        pub active_seq: u64,
    }

    /// A fetch or parse failed and a failure view was shown
    #[derive(Debug, Clone)]
    pub struct FetchFailed {
        pub context: String,
        pub error: String,
    }

    /// A view was mounted into a region
    #[derive(Debug, Clone)]
    pub struct ViewMounted {
        pub region: String,
        pub view_type: String,
    }

    /// A view was torn down
    #[derive(Debug, Clone)]
    pub struct ViewUnmounted {
        pub region: String,
        pub view_type: String,
    }

    /// A results page was applied to the mounted results view
    #[derive(Debug, Clone)]
    pub struct PageLoaded {
        pub page: u32,
        pub total_pages: u32,
        pub item_count: usize,
    }

    // Implement Event trait for all event types
    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(
        RouteChanged,
        RouteNotFound,
        StaleResponseDiscarded,
        FetchFailed,
        ViewMounted,
        ViewUnmounted,
        PageLoaded
    );
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push(handler);
    }

    /// Subscribe a closure that receives the concrete event type.
    /// See [`EventBus::publish`] for what the closure may do.
    pub fn subscribe_fn<E, F>(&self, mut f: F)
    where
        E: Event,
        F: FnMut(&E) + Send + Sync + 'static,
    {
        self.subscribe::<E>(handler_from_fn(move |event| {
            if let Some(event) = event.as_any().downcast_ref::<E>() {
                f(event);
            }
        }));
    }

    /// Publish an event.
    ///
    /// Handlers run while the bus is locked, so they must not publish or
    /// subscribe, and callers should not publish while holding a lock a
    /// handler may need.
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}
