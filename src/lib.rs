//! Menu Dashboard UI
//!
//! Confirmation-guarded deletion for the restaurant dashboard. The core
//! modules are platform independent; `web`, `context` and `components` plug
//! them into the browser.

pub mod app;
pub mod binding;
pub mod components;
pub mod config;
pub mod context;
pub mod dialog;
pub mod error;
pub mod flow;
pub mod locator;
pub mod transport;
pub mod web;

pub use config::{BindingMode, FailureFeedback, HandlerConfig};
pub use error::{BindError, ConfigError, TransportError};
pub use flow::{DeleteFailure, DeleteFlow, DeleteOutcome};
pub use locator::ResourceLocator;
