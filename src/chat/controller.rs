//! Chat controller — drives one conversation against a flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns the [`Conversation`] and is the only thing that
//! mutates it. Two events do so: a user submission and the completion of
//! the in-flight request. Requests run on a spawned task and report back
//! over a channel, so the event loop never blocks on the network and no
//! lock guards the history.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::state::{Conversation, Message, SubmissionState};
use crate::flow::{FlowChat, FlowError};

/// Presentation hooks fired by the controller.
pub trait ChatView {
    /// History changed; the newest message is last and should be brought
    /// into view.
    fn history_changed(&mut self, messages: &[Message]);

    /// Submission state changed. `Pending` means input is disabled.
    fn submission_state_changed(&mut self, state: SubmissionState);

    /// A submission was rejected (blank text or a request already pending).
    fn submission_rejected(&mut self, _text: &str) {}
}

type Outcome = Result<Value, FlowError>;

pub struct ChatController<V> {
    conversation: Conversation,
    flow: Arc<dyn FlowChat>,
    view: V,
    completions_tx: mpsc::UnboundedSender<Outcome>,
    completions_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl<V: ChatView> ChatController<V> {
    pub fn new(flow: Arc<dyn FlowChat>, view: V) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self { conversation: Conversation::new(), flow, view, completions_tx, completions_rx }
    }

    #[must_use]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_parts(self) -> (Conversation, V) {
        (self.conversation, self.view)
    }

    /// Submit user text. Returns immediately; the request runs in the
    /// background and its result arrives through [`Self::next_completion`]
    /// or [`Self::run`].
    ///
    /// Returns `false` (and changes nothing) for blank text or while a
    /// request is pending.
    pub fn submit(&mut self, text: &str) -> bool {
        let Some(utterance) = self.conversation.begin_submission(text) else {
            debug!(pending = self.conversation.is_pending(), "chat: submission rejected");
            self.view.submission_rejected(text);
            return false;
        };
        info!(input_len = utterance.len(), "chat: submission accepted");
        self.view.history_changed(self.conversation.messages());
        self.view.submission_state_changed(SubmissionState::Pending);

        let flow = Arc::clone(&self.flow);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = flow.run(&utterance).await;
            // A closed receiver means the session is gone; drop the result.
            let _ = tx.send(outcome);
        });
        true
    }

    /// Wait for the pending request to finish and apply its outcome.
    ///
    /// Returns `None` immediately when nothing is pending.
    pub async fn next_completion(&mut self) -> Option<&Message> {
        if !self.conversation.is_pending() {
            return None;
        }
        let outcome = self.completions_rx.recv().await?;
        if self.complete(outcome) { self.conversation.messages().last() } else { None }
    }

    /// Event loop: submit every line from `input` and apply completions as
    /// they arrive. Ends when `input` closes; a request still in flight at
    /// that point is abandoned.
    pub async fn run(&mut self, mut input: mpsc::Receiver<String>) {
        loop {
            tokio::select! {
                line = input.recv() => match line {
                    Some(text) => {
                        self.submit(&text);
                    }
                    None => break,
                },
                Some(outcome) = self.completions_rx.recv() => {
                    self.complete(outcome);
                }
            }
        }
        if self.conversation.is_pending() {
            debug!("chat: input closed with a request in flight; response will be discarded");
        }
    }

    fn complete(&mut self, outcome: Outcome) -> bool {
        if let Err(e) = &outcome {
            warn!(error = %e, "chat: flow request failed");
        }
        if self.conversation.resolve(outcome).is_none() {
            debug!("chat: dropped completion with nothing pending");
            return false;
        }
        self.view.history_changed(self.conversation.messages());
        self.view.submission_state_changed(SubmissionState::Idle);
        true
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
