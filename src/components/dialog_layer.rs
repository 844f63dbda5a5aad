//! Dialog Layer Component
//!
//! Modal overlay rendering the dialog at the head of the `ModalHost` queue.

use leptos::ev;
use leptos::prelude::*;

use crate::context::use_modal_host;
use crate::dialog::Decision;

/// Modal dialog overlay
///
/// Renders nothing while the queue is empty. Clicking the backdrop or
/// pressing Escape dismisses the dialog on top.
#[component]
pub fn DialogLayer() -> impl IntoView {
    let host = use_modal_host();

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            host.dismiss_current();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        {move || host.current().map(|pending| {
            let id = pending.id;
            let spec = pending.spec;
            let cancel = spec.cancel.clone();

            view! {
                <div
                    class="dialog-backdrop"
                    on:click=move |_| host.close(id, Decision::Dismissed)
                >
                    <div
                        class="dialog"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class=spec.icon.css_class()>{spec.icon.glyph()}</div>
                        <h2 class="dialog-title">{spec.title}</h2>
                        <p class="dialog-text">{spec.text}</p>
                        <div class="dialog-actions">
                            <button
                                class="dialog-confirm"
                                style=format!("background-color: {};", spec.confirm_color)
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    host.close(id, Decision::Confirmed);
                                }
                            >
                                {spec.confirm_text}
                            </button>
                            {cancel.map(|cancel| view! {
                                <button
                                    class="dialog-cancel"
                                    style=format!("background-color: {};", cancel.color)
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        host.close(id, Decision::Cancelled);
                                    }
                                >
                                    {cancel.text}
                                </button>
                            })}
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
