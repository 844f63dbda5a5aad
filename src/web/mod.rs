//! Browser Bindings
//!
//! DOM, fetch and location implementations of the delete flow's seams.

mod diagnostics;
mod fetch;
mod install;
mod location;

pub use diagnostics::recent_logs;
pub use fetch::FetchTransport;
pub use install::{install, load_config, run_when_ready, Installation, WebControl, WebDeleteFlow};
pub use location::WindowNavigator;
