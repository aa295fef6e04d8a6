use feedback_spots_engine::{Comment, EventLog, FeedbackEvent, FeedbackObserver, Reply, SpotPayload};

/// Logs each event for the host and keeps them for display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingObserver {
    log: EventLog,
}

impl LoggingObserver {
    pub fn events(&self) -> &[FeedbackEvent] {
        self.log.events()
    }
}

impl FeedbackObserver for LoggingObserver {
    fn on_save_comment(&mut self, payload: &SpotPayload) {
        log::info!(
            "saveComment: {} comment(s) on spot over {}",
            payload.comments.len(),
            payload.position.container
        );
        self.log.on_save_comment(payload);
    }

    fn on_cancel_comment(&mut self, comment: &Comment) {
        log::info!("cancelComment: discarded {:?}", comment.text);
        self.log.on_cancel_comment(comment);
    }

    fn on_save_reply(&mut self, comment: &Comment) {
        log::info!(
            "saveReply: {} reply(ies) to {:?}",
            comment.replies.len(),
            comment.text
        );
        self.log.on_save_reply(comment);
    }

    fn on_cancel_reply(&mut self, reply: &Reply) {
        log::info!("cancelReply: discarded {:?}", reply.text);
        self.log.on_cancel_reply(reply);
    }
}
