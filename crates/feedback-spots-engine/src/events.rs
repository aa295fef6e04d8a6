//! Outbound notifications for the embedding application.
//!
//! Saves carry the owner after it has been mutated (the spot payload for a
//! new comment, the comment for a new reply). Cancels carry the record that
//! would have been created; it is never added to any collection.

use crate::models::{Comment, Reply, SpotPayload};
use std::sync::mpsc::Sender;

pub trait FeedbackObserver {
    fn on_save_comment(&mut self, payload: &SpotPayload);
    fn on_cancel_comment(&mut self, comment: &Comment);
    fn on_save_reply(&mut self, comment: &Comment);
    fn on_cancel_reply(&mut self, reply: &Reply);
}

/// Owned form of a notification, for recording or sending across threads
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackEvent {
    SaveComment(SpotPayload),
    CancelComment(Comment),
    SaveReply(Comment),
    CancelReply(Reply),
}

impl FeedbackEvent {
    /// Event name as used by hosts that dispatch on strings
    pub fn name(&self) -> &'static str {
        match self {
            FeedbackEvent::SaveComment(_) => "saveComment",
            FeedbackEvent::CancelComment(_) => "cancelComment",
            FeedbackEvent::SaveReply(_) => "saveReply",
            FeedbackEvent::CancelReply(_) => "cancelReply",
        }
    }
}

/// Observer that keeps every event in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<FeedbackEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&FeedbackEvent> {
        self.events.last()
    }

    pub fn drain(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.events)
    }
}

impl FeedbackObserver for EventLog {
    fn on_save_comment(&mut self, payload: &SpotPayload) {
        self.events.push(FeedbackEvent::SaveComment(payload.clone()));
    }

    fn on_cancel_comment(&mut self, comment: &Comment) {
        self.events.push(FeedbackEvent::CancelComment(comment.clone()));
    }

    fn on_save_reply(&mut self, comment: &Comment) {
        self.events.push(FeedbackEvent::SaveReply(comment.clone()));
    }

    fn on_cancel_reply(&mut self, reply: &Reply) {
        self.events.push(FeedbackEvent::CancelReply(reply.clone()));
    }
}

/// Forwards events to a receiver, typically on another thread. Events sent
/// after the receiver is dropped are logged and discarded.
impl FeedbackObserver for Sender<FeedbackEvent> {
    fn on_save_comment(&mut self, payload: &SpotPayload) {
        forward(self, FeedbackEvent::SaveComment(payload.clone()));
    }

    fn on_cancel_comment(&mut self, comment: &Comment) {
        forward(self, FeedbackEvent::CancelComment(comment.clone()));
    }

    fn on_save_reply(&mut self, comment: &Comment) {
        forward(self, FeedbackEvent::SaveReply(comment.clone()));
    }

    fn on_cancel_reply(&mut self, reply: &Reply) {
        forward(self, FeedbackEvent::CancelReply(reply.clone()));
    }
}

fn forward(sender: &Sender<FeedbackEvent>, event: FeedbackEvent) {
    let name = event.name();
    if sender.send(event).is_err() {
        log::warn!("Dropping {name} event: receiver disconnected");
    }
}
