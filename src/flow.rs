//! Delete Flow
//!
//! Prompt, request, acknowledge, navigate. One run per activated control;
//! runs share nothing but the injected capabilities.

use thiserror::Error;

use crate::config::{FailureFeedback, HandlerConfig};
use crate::dialog::{ConfirmDialog, DialogSpec};
use crate::error::TransportError;
use crate::locator::ResourceLocator;
use crate::transport::{DeleteTransport, Navigator};

/// Why a confirmed deletion did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteFailure {
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result of one activation of a delete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    /// The server accepted the request and the dashboard was requested.
    Deleted,
    Failed(DeleteFailure),
}

pub struct DeleteFlow<D, T, N> {
    dialog: D,
    transport: T,
    navigator: N,
    config: HandlerConfig,
}

impl<D, T, N> DeleteFlow<D, T, N>
where
    D: ConfirmDialog,
    T: DeleteTransport,
    N: Navigator,
{
    pub fn new(dialog: D, transport: T, navigator: N, config: HandlerConfig) -> Self {
        Self {
            dialog,
            transport,
            navigator,
            config,
        }
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Run the whole confirmation flow for one target.
    pub async fn run(&self, target: &ResourceLocator) -> DeleteOutcome {
        let prompt = DialogSpec::confirm_delete(&self.config.texts, &self.config.colors);
        let decision = self.dialog.prompt(prompt).await;
        if !decision.is_confirmed() {
            log::debug!("[DELETE] {} declined ({:?})", target, decision);
            return DeleteOutcome::Cancelled;
        }

        log::info!("[DELETE] {} {}", self.config.method.as_str(), target);
        let result = match self.transport.send(self.config.method, target).await {
            Ok(response) if response.ok => Ok(()),
            Ok(response) => Err(DeleteFailure::Status(response.status)),
            Err(err) => Err(DeleteFailure::Transport(err)),
        };

        match result {
            Ok(()) => {
                self.acknowledge_success(target).await;
                DeleteOutcome::Deleted
            }
            Err(failure) => {
                self.report_failure(target, &failure).await;
                DeleteOutcome::Failed(failure)
            }
        }
    }

    async fn acknowledge_success(&self, target: &ResourceLocator) {
        log::info!("[DELETE] {} removed", target);
        let ack = DialogSpec::deleted(&self.config.texts, &self.config.colors);
        // Any way of closing the acknowledgment leads to the dashboard.
        let _ = self.dialog.prompt(ack).await;
        self.navigator.navigate(&self.config.dashboard_path);
    }

    async fn report_failure(&self, target: &ResourceLocator, failure: &DeleteFailure) {
        log::warn!("[DELETE] {} failed: {}", target, failure);
        if self.config.failure_feedback == FailureFeedback::Alert {
            let status = match failure {
                DeleteFailure::Status(status) => Some(*status),
                DeleteFailure::Transport(_) => None,
            };
            let ack = DialogSpec::delete_failed(&self.config.texts, &self.config.colors, status);
            let _ = self.dialog.prompt(ack).await;
        }
    }
}
