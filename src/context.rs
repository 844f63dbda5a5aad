//! Modal Context
//!
//! Dialog queue shared via Leptos Context API. The delete flow pushes
//! prompts here and the `DialogLayer` component renders and answers them.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;

use crate::dialog::{ConfirmDialog, Decision, DialogSpec};

/// A dialog waiting for an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDialog {
    pub id: u64,
    pub spec: DialogSpec,
}

/// Handle to the modal dialog queue
#[derive(Clone, Copy)]
pub struct ModalHost {
    /// Open dialogs, oldest first; only the first is rendered
    queue: RwSignal<Vec<PendingDialog>>,
    /// Answer channel per dialog id
    responders: StoredValue<HashMap<u64, oneshot::Sender<Decision>>>,
    next_id: StoredValue<u64>,
}

impl ModalHost {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
            responders: StoredValue::new(HashMap::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Dialog currently shown, if any.
    pub fn current(&self) -> Option<PendingDialog> {
        self.queue.with(|queue| queue.first().cloned())
    }

    pub fn open_count(&self) -> usize {
        self.queue.with_untracked(|queue| queue.len())
    }

    fn open(&self, spec: DialogSpec, responder: oneshot::Sender<Decision>) -> u64 {
        let id = self
            .next_id
            .try_update_value(|next| {
                *next += 1;
                *next
            })
            .unwrap_or_default();
        self.responders.update_value(|responders| {
            responders.insert(id, responder);
        });
        self.queue.update(|queue| queue.push(PendingDialog { id, spec }));
        id
    }

    /// Close dialog `id`, resolving its prompt with `decision`.
    pub fn close(&self, id: u64, decision: Decision) {
        self.queue.update(|queue| queue.retain(|pending| pending.id != id));
        let responder = self
            .responders
            .try_update_value(|responders| responders.remove(&id))
            .flatten();
        if let Some(responder) = responder {
            // The prompting flow may have been dropped; nothing to answer then.
            let _ = responder.send(decision);
        }
    }

    /// Close whatever dialog is on top as if it were dismissed.
    pub fn dismiss_current(&self) {
        if let Some(pending) = self.queue.with_untracked(|queue| queue.first().cloned()) {
            self.close(pending.id, Decision::Dismissed);
        }
    }
}

impl Default for ModalHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ConfirmDialog for ModalHost {
    async fn prompt(&self, spec: DialogSpec) -> Decision {
        let (tx, rx) = oneshot::channel();
        let id = self.open(spec, tx);
        log::debug!("[MODAL] dialog {} opened", id);
        rx.await.unwrap_or(Decision::Dismissed)
    }
}

/// Get the modal host from context
pub fn use_modal_host() -> ModalHost {
    expect_context::<ModalHost>()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::future::join;

    use super::*;
    use crate::dialog::{DialogColors, DialogTexts};

    fn prompt_spec() -> DialogSpec {
        DialogSpec::confirm_delete(&DialogTexts::default(), &DialogColors::default())
    }

    #[test]
    fn closing_resolves_the_prompt() {
        let host = ModalHost::new();
        let answer = async {
            let pending = host.current().expect("dialog is open");
            host.close(pending.id, Decision::Cancelled);
        };

        let (decision, ()) = block_on(join(host.prompt(prompt_spec()), answer));

        assert_eq!(decision, Decision::Cancelled);
        assert_eq!(host.open_count(), 0);
    }

    #[test]
    fn dialogs_queue_in_order() {
        let host = ModalHost::new();
        let answer = async {
            let first = host.current().expect("first dialog");
            assert_eq!(host.open_count(), 2);
            host.close(first.id, Decision::Confirmed);
            let second = host.current().expect("second dialog");
            assert_ne!(first.id, second.id);
            host.dismiss_current();
        };

        let ((a, b), ()) = block_on(join(
            join(host.prompt(prompt_spec()), host.prompt(prompt_spec())),
            answer,
        ));

        assert_eq!(a, Decision::Confirmed);
        assert_eq!(b, Decision::Dismissed);
        assert!(host.current().is_none());
    }

    #[test]
    fn closing_unknown_dialog_is_harmless() {
        let host = ModalHost::new();
        host.close(42, Decision::Confirmed);
        assert_eq!(host.open_count(), 0);
    }
}
