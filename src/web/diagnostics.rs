//! Diagnostics
//!
//! Recent log lines, callable from the devtools console when reporting a
//! failed deletion: `wasm_bindgen.recentLogs()`.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = recentLogs)]
pub fn recent_logs() -> String {
    console_logger::recent_lines().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_buffered_lines() {
        console_logger::init(log::LevelFilter::Debug).unwrap();
        log::warn!("[DELETE] /delete_item/1 failed: server responded with HTTP 500");

        let logs = recent_logs();
        assert!(logs.contains("/delete_item/1 failed"));
    }
}
