//! Window Navigation

use crate::transport::Navigator;

/// Navigates by assigning `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("[NAV] no window, cannot open {}", path);
            return;
        };
        log::info!("[NAV] -> {}", path);
        if let Err(err) = window.location().set_href(path) {
            log::error!("[NAV] failed to open {}: {:?}", path, err);
        }
    }
}
