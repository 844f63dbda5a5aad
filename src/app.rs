//! Menu Dashboard App
//!
//! Root component: owns the modal queue and installs delete handling on the
//! server-rendered dashboard once the overlay is mounted.

use leptos::prelude::*;

use crate::components::DialogLayer;
use crate::context::ModalHost;
use crate::web::{self, Installation};

#[component]
pub fn App() -> impl IntoView {
    let modal = ModalHost::new();
    let installation = StoredValue::new_local(None::<Installation>);

    // Provide context to all children
    provide_context(modal);

    // Runs once, after mount
    Effect::new(move |_| {
        web::run_when_ready(move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                log::error!("[INIT] no document");
                return;
            };
            let config = web::load_config(&document);
            match web::install(config, modal) {
                Ok(installed) => {
                    log::info!("[INIT] delete handling installed ({} static controls)", installed.bound_count());
                    installation.set_value(Some(installed));
                }
                Err(err) => log::error!("[INIT] delete handling not installed: {}", err),
            }
        });
    });

    on_cleanup(move || {
        if let Some(installed) = installation.try_update_value(Option::take).flatten() {
            installed.uninstall();
        }
    });

    view! {
        <DialogLayer />
    }
}
