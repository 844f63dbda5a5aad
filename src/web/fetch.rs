//! Fetch Transport
//!
//! `window.fetch` binding for the delete request.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, RequestInit, Response};

use crate::error::TransportError;
use crate::locator::ResourceLocator;
use crate::transport::{with_timeout, DeleteResponse, DeleteTransport, HttpMethod};

/// Sends body-less requests with the page's default credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport {
    /// Abort after this many milliseconds; `None` waits forever.
    timeout_ms: Option<u32>,
}

impl FetchTransport {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait(?Send)]
impl DeleteTransport for FetchTransport {
    async fn send(
        &self,
        method: HttpMethod,
        target: &ResourceLocator,
    ) -> Result<DeleteResponse, TransportError> {
        let window = web_sys::window().ok_or(TransportError::NoWindow)?;

        let init = RequestInit::new();
        init.set_method(method.as_str());

        let value = match self.timeout_ms {
            None => JsFuture::from(window.fetch_with_str_and_init(target.as_str(), &init))
                .await
                .map_err(network_error)?,
            Some(ms) => {
                let controller = AbortController::new().map_err(network_error)?;
                init.set_signal(Some(&controller.signal()));

                let request = JsFuture::from(window.fetch_with_str_and_init(target.as_str(), &init));
                match with_timeout(request, TimeoutFuture::new(ms), ms).await {
                    Ok(result) => result.map_err(network_error)?,
                    Err(err) => {
                        controller.abort();
                        return Err(err);
                    }
                }
            }
        };

        let response: Response = value
            .dyn_into()
            .map_err(|_| TransportError::InvalidResponse("fetch did not yield a Response".into()))?;
        Ok(DeleteResponse {
            ok: response.ok(),
            status: response.status(),
        })
    }
}

fn network_error(value: JsValue) -> TransportError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    TransportError::Network(message)
}
