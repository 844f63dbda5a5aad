//! Delete Transport
//!
//! The single outbound request issued per confirmed deletion.

use std::future::Future;

use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::locator::ResourceLocator;

/// State-changing verbs the dashboard accepts for deletions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// The part of a response the handler looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResponse {
    pub ok: bool,
    /// Kept for diagnostics only; success is decided by `ok`.
    pub status: u16,
}

impl DeleteResponse {
    pub fn from_status(status: u16) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
        }
    }
}

/// Sends a body-less request to a resource locator.
#[async_trait(?Send)]
pub trait DeleteTransport {
    async fn send(
        &self,
        method: HttpMethod,
        target: &ResourceLocator,
    ) -> Result<DeleteResponse, TransportError>;
}

/// Race `request` against `timer`; a timer that fires first yields
/// `TransportError::TimedOut(ms)` and drops the request future.
pub async fn with_timeout<R, T>(request: R, timer: T, ms: u32) -> Result<R::Output, TransportError>
where
    R: Future,
    T: Future<Output = ()>,
{
    pin_mut!(request, timer);
    match select(request, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(TransportError::TimedOut(ms)),
    }
}

/// Moves the browser to another location.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    use super::*;

    #[test]
    fn request_that_never_answers_times_out() {
        let result = block_on(with_timeout(pending::<u16>(), ready(()), 8000));
        assert_eq!(result, Err(TransportError::TimedOut(8000)));
    }

    #[test]
    fn answered_request_beats_the_timer() {
        let result = block_on(with_timeout(ready(204u16), pending::<()>(), 8000));
        assert_eq!(result, Ok(204));
    }

    #[test]
    fn ok_is_2xx() {
        assert!(DeleteResponse::from_status(200).ok);
        assert!(DeleteResponse::from_status(204).ok);
        assert!(!DeleteResponse::from_status(302).ok);
        assert!(!DeleteResponse::from_status(404).ok);
        assert!(!DeleteResponse::from_status(500).ok);
    }

    #[test]
    fn method_names() {
        assert_eq!(HttpMethod::default().as_str(), "POST");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        let parsed: HttpMethod = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(parsed, HttpMethod::Delete);
    }
}
