//! UI Components
//!
//! Leptos components rendered into the dashboard page.

mod dialog_layer;

pub use dialog_layer::DialogLayer;
