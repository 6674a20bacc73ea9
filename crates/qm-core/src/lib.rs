//! Core functionality for the qualification model dashboard
//! 
//! This crate provides the closed set of dashboard views, the selector that
//! holds the single piece of mutable state (the active view) and the event
//! bus used to notify observers when that state changes.

pub mod events;
pub mod selector;
pub mod view;

// Re-export commonly used types
pub use events::{EventBus, Event, EventHandler, handler_from_fn};
pub use selector::ViewSelector;
pub use view::{ViewId, ViewError};
