//! Active view selection

use std::sync::Arc;
use parking_lot::RwLock;

use crate::events::{EventBus, events::{ViewChanged, ViewRejected}};
use crate::view::{ViewError, ViewId};

/// Holds the active view.
///
/// The dashboard is the only writer; chart views and the CSV exporter read it
/// through the shared viewer context.
pub struct ViewSelector {
    active: RwLock<ViewId>,
    event_bus: Arc<EventBus>,
}

impl ViewSelector {
    /// Create a new selector with `initial` active
    pub fn new(initial: ViewId, event_bus: Arc<EventBus>) -> Self {
        Self {
            active: RwLock::new(initial),
            event_bus,
        }
    }
    
    /// Currently active view
    pub fn active_view(&self) -> ViewId {
        *self.active.read()
    }
    
    /// Make `view` active, notifying observers if it changed
    pub fn set_active_view(&self, view: ViewId) {
        let mut active = self.active.write();
        let previous = *active;
        if previous == view {
            return;
        }
        *active = view;
        drop(active);
        
        tracing::info!("Active view changed: {} -> {}", previous, view);
        self.event_bus.publish(ViewChanged { from: previous, to: view });
    }
    
    /// Select a view by slug.
    ///
    /// Unknown slugs leave the active view untouched.
    pub fn select(&self, slug: &str) -> Result<ViewId, ViewError> {
        match slug.parse::<ViewId>() {
            Ok(view) => {
                self.set_active_view(view);
                Ok(view)
            }
            Err(e) => {
                tracing::warn!("Ignoring view selection: {}", e);
                self.event_bus.publish(ViewRejected { requested: slug.to_string() });
                Err(e)
            }
        }
    }
    
    /// The bus this selector publishes on
    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::handler_from_fn;
    use parking_lot::Mutex;
    
    fn selector() -> ViewSelector {
        ViewSelector::new(ViewId::Summary, Arc::new(EventBus::new()))
    }
    
    #[test]
    fn test_set_and_get() {
        let selector = selector();
        assert_eq!(selector.active_view(), ViewId::Summary);
        
        selector.set_active_view(ViewId::VspOccupations);
        assert_eq!(selector.active_view(), ViewId::VspOccupations);
    }
    
    #[test]
    fn test_invalid_slug_keeps_previous_view() {
        let selector = selector();
        selector.set_active_view(ViewId::Population);
        
        let result = selector.select("demographics");
        assert_eq!(result, Err(ViewError::InvalidView("demographics".to_string())));
        assert_eq!(selector.active_view(), ViewId::Population);
    }
    
    #[test]
    fn test_select_valid_slug() {
        let selector = selector();
        assert_eq!(selector.select("rampup"), Ok(ViewId::RampUp));
        assert_eq!(selector.active_view(), ViewId::RampUp);
    }
    
    #[test]
    fn test_change_notifications() {
        let bus = Arc::new(EventBus::new());
        let changes = Arc::new(Mutex::new(Vec::new()));
        let rejected = Arc::new(Mutex::new(0usize));
        
        let sink = changes.clone();
        bus.subscribe::<ViewChanged>(handler_from_fn(move |event| {
            if let Some(changed) = event.as_any().downcast_ref::<ViewChanged>() {
                sink.lock().push(changed.clone());
            }
        }));
        let counter = rejected.clone();
        bus.subscribe::<ViewRejected>(handler_from_fn(move |_| {
            *counter.lock() += 1;
        }));
        
        let selector = ViewSelector::new(ViewId::Summary, bus);
        selector.set_active_view(ViewId::Qualifications);
        // Re-selecting the active view is not a change
        selector.set_active_view(ViewId::Qualifications);
        let _ = selector.select("bogus");
        
        assert_eq!(
            *changes.lock(),
            vec![ViewChanged { from: ViewId::Summary, to: ViewId::Qualifications }]
        );
        assert_eq!(*rejected.lock(), 1);
    }
}
