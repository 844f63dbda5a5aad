//! Page Installation
//!
//! Attaches delete handling to the host page once its markup is available.

use std::fmt;
use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, MouseEvent};

use crate::binding::{self, BoundControls, DeleteControl};
use crate::config::{HandlerConfig, CONFIG_ELEMENT_ID};
use crate::context::ModalHost;
use crate::error::BindError;
use crate::flow::DeleteFlow;
use crate::web::{FetchTransport, WindowNavigator};

pub type WebDeleteFlow = DeleteFlow<ModalHost, FetchTransport, WindowNavigator>;

type ClickListener = Closure<dyn FnMut(MouseEvent)>;

/// A DOM element acting as a delete control.
#[derive(Clone)]
pub struct WebControl {
    element: Element,
    attribute: Rc<str>,
}

impl WebControl {
    fn new(element: Element, attribute: Rc<str>) -> Self {
        Self { element, attribute }
    }
}

impl PartialEq for WebControl {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl fmt::Debug for WebControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl DeleteControl for WebControl {
    fn locator_attribute(&self) -> Option<String> {
        self.element.get_attribute(&self.attribute)
    }

    fn describe(&self) -> String {
        let mut out = format!("<{}", self.element.tag_name().to_lowercase());
        let id = self.element.id();
        if !id.is_empty() {
            out.push_str(&format!(" id=\"{}\"", id));
        }
        let class = self.element.class_name();
        if !class.is_empty() {
            out.push_str(&format!(" class=\"{}\"", class));
        }
        out.push('>');
        out
    }
}

/// Live click listeners of an installed handler.
pub struct Installation {
    bound: Rc<BoundControls<WebControl>>,
    listeners: Vec<(EventTarget, ClickListener)>,
}

impl Installation {
    /// Number of controls bound statically; zero in delegated mode.
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// Remove every listener this installation added.
    pub fn uninstall(self) {
        for (target, listener) in &self.listeners {
            let _ = target
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
        log::info!("[INIT] delete handling removed");
    }
}

/// Read JSON overrides embedded in the page, falling back to defaults.
pub fn load_config(document: &Document) -> HandlerConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return HandlerConfig::default();
    };
    match HandlerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::error!("[CONFIG] {}; using defaults", err);
            HandlerConfig::default()
        }
    }
}

/// Bind delete handling to the current document.
pub fn install(config: HandlerConfig, dialog: ModalHost) -> Result<Installation, BindError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BindError::NoDocument)?;

    let attribute: Rc<str> = Rc::from(config.url_attribute.as_str());
    let nodes = document
        .query_selector_all(&config.selector)
        .map_err(dom_error)?;
    let controls = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|element| WebControl::new(element, attribute.clone()));

    let bound = Rc::new(binding::bind(config.binding, controls)?);
    let selector = config.selector.clone();
    let flow = Rc::new(DeleteFlow::new(
        dialog,
        FetchTransport::new(config.request_timeout_ms),
        WindowNavigator,
        config,
    ));

    let mut listeners = Vec::new();
    match bound.as_ref() {
        BoundControls::Static(_) => {
            for control in bound.controls() {
                let listener = {
                    let bound = bound.clone();
                    let flow = flow.clone();
                    let control = control.clone();
                    ClickListener::new(move |_ev: MouseEvent| dispatch(&bound, &flow, &control))
                };
                let target: EventTarget = control.element.clone().into();
                add_click_listener(&target, &listener)?;
                listeners.push((target, listener));
            }
        }
        BoundControls::Delegated => {
            let container = document.body().ok_or(BindError::NoDocument)?;
            let listener = {
                let bound = bound.clone();
                let flow = flow.clone();
                ClickListener::new(move |ev: MouseEvent| {
                    let control = ev
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| {
                            binding::closest(
                                el,
                                |node| node.parent_element(),
                                |node| node.matches(&selector).unwrap_or(false),
                            )
                        })
                        .map(|el| WebControl::new(el, attribute.clone()));
                    if let Some(control) = control {
                        dispatch(&bound, &flow, &control);
                    }
                })
            };
            let target: EventTarget = container.into();
            add_click_listener(&target, &listener)?;
            listeners.push((target, listener));
        }
    }

    Ok(Installation { bound, listeners })
}

/// Run `f` once the document has been parsed.
pub fn run_when_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("[INIT] no document; delete handling disabled");
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::error!("[INIT] cannot wait for DOMContentLoaded: {:?}", err);
    }
}

fn dispatch(bound: &BoundControls<WebControl>, flow: &Rc<WebDeleteFlow>, control: &WebControl) {
    let Some(locator) = bound.resolve(control) else {
        return;
    };
    let flow = flow.clone();
    spawn_local(async move {
        let outcome = flow.run(&locator).await;
        log::debug!("[DELETE] {} -> {:?}", locator, outcome);
    });
}

fn add_click_listener(target: &EventTarget, listener: &ClickListener) -> Result<(), BindError> {
    target
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(dom_error)
}

fn dom_error(value: JsValue) -> BindError {
    BindError::Dom(format!("{:?}", value))
}
