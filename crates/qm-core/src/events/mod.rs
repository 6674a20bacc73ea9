use std::sync::Arc;
use parking_lot::Mutex;
use ahash::AHashMap;

/// Dashboard-wide event bus
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

/// Common dashboard events
pub mod events {
    use super::Event;
    use crate::ViewId;
    
    /// The active view changed
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ViewChanged {
        pub from: ViewId,
        pub to: ViewId,
    }
    
    /// A view selection was rejected
    #[derive(Debug, Clone)]
    pub struct ViewRejected {
        pub requested: String,
    }
    
    /// A CSV export was written
    #[derive(Debug, Clone)]
    pub struct ExportCompleted {
        pub view: ViewId,
        pub filename: String,
        pub bytes: usize,
    }
    
    /// A CSV export could not be written
    #[derive(Debug, Clone)]
    pub struct ExportFailed {
        pub view: ViewId,
        pub error: String,
    }
    
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
        ViewChanged,
        ViewRejected,
        ExportCompleted,
        ExportFailed
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
    
    /// Publish an event
    ///
    /// Handlers run synchronously on the caller's thread and must not publish
    /// from inside `handle`.
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

#[cfg(test)]
mod tests {
    use super::*;
    use super::events::{ViewChanged, ViewRejected};
    use crate::ViewId;
    
    #[test]
    fn test_publish_reaches_matching_subscribers_only() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        
        let sink = seen.clone();
        bus.subscribe::<ViewChanged>(handler_from_fn(move |event| {
            if let Some(changed) = event.as_any().downcast_ref::<ViewChanged>() {
                sink.lock().push(changed.to);
            }
        }));
        
        bus.publish(ViewChanged { from: ViewId::Summary, to: ViewId::RampUp });
        bus.publish(ViewRejected { requested: "nope".to_string() });
        
        assert_eq!(*seen.lock(), vec![ViewId::RampUp]);
    }
    
    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::default();
        bus.publish(ViewChanged { from: ViewId::Summary, to: ViewId::Population });
    }
}
