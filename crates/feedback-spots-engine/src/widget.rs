use crate::controller::SpotController;
use crate::error::FeedbackError;
use crate::events::FeedbackObserver;
use crate::layout::PageLayout;
use crate::models::{Comment, Marker, PositionDescriptor, Reply, SpotId, SpotPayload, TextField};
use crate::placement;
use crate::render::{self, FieldTarget, Node, UiAction};
use crate::session::{DatetimeDisplay, Session};
use std::collections::{BTreeMap, HashMap};

const COMMENT_LABEL: &str = "Comment:";
const REPLY_LABEL: &str = "Reply:";

/// Handle returned when a box is attached to a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxParts {
    pub spot: SpotId,
    pub toggled: bool,
}

/// Authoring drafts of one info box
#[derive(Debug, Clone, Default)]
struct BoxForms {
    /// Whether the box lists the spot's comments
    thread: bool,
    /// New-comment draft; absent in read-only boxes
    comment: Option<TextField>,
    /// At most one reply draft per comment index
    replies: BTreeMap<usize, TextField>,
}

/// One independent set of feedback spots on a page.
///
/// The widget owns marker placement, which box is open and the authoring
/// drafts. Comment collections stay with the host: operations that change
/// them borrow the spot's [`SpotPayload`] and push into it in place.
pub struct FeedbackWidget<O: FeedbackObserver> {
    controller: SpotController,
    session: Session,
    display: DatetimeDisplay,
    observer: O,
    forms: HashMap<SpotId, BoxForms>,
}

impl<O: FeedbackObserver> FeedbackWidget<O> {
    pub fn new(session: Session, observer: O) -> Self {
        Self {
            controller: SpotController::new(),
            session,
            display: DatetimeDisplay::default(),
            observer,
            forms: HashMap::new(),
        }
    }

    pub fn with_display(mut self, display: DatetimeDisplay) -> Self {
        self.display = display;
        self
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn markers(&self) -> &[Marker] {
        self.controller.markers()
    }

    /// Place a marker over its container and mount it in the body
    pub fn create_marker(
        &mut self,
        layout: &(impl PageLayout + ?Sized),
        descriptor: &PositionDescriptor,
    ) -> Result<SpotId, FeedbackError> {
        let (left, top) = placement::place(layout, descriptor)?;
        Ok(self.controller.mount(Marker::new(left, top)))
    }

    /// Attach an empty box to a marker. Untoggled boxes never open or close.
    pub fn add_box(&mut self, spot: SpotId, toggled: bool) -> Result<BoxParts, FeedbackError> {
        self.controller.attach_box(spot, toggled)?;
        self.forms.entry(spot).or_default();
        Ok(BoxParts { spot, toggled })
    }

    /// Attach a toggled box showing the spot's comments and a new-comment form
    pub fn create_info_box(&mut self, spot: SpotId) -> Result<BoxParts, FeedbackError> {
        let parts = self.add_box(spot, true)?;
        let forms = self.forms_mut(spot)?;
        forms.thread = true;
        forms
            .comment
            .get_or_insert_with(|| TextField::new(COMMENT_LABEL));
        Ok(parts)
    }

    /// Attach an always-shown, untoggled box listing the spot's comments
    /// without a new-comment form
    pub fn create_read_only_box(&mut self, spot: SpotId) -> Result<BoxParts, FeedbackError> {
        let parts = self.add_box(spot, false)?;
        self.forms_mut(spot)?.thread = true;
        Ok(parts)
    }

    /// Returns whether the open spot changed
    pub fn click_spot(&mut self, spot: SpotId) -> Result<bool, FeedbackError> {
        self.controller.click(spot)
    }

    pub fn close_info_box(&mut self) {
        self.controller.close_info_box();
    }

    pub fn is_active(&self, spot: SpotId) -> bool {
        self.controller.is_active(spot)
    }

    pub fn open_spot(&self) -> Option<SpotId> {
        self.controller.open_spot()
    }

    pub fn set_open_spot(&mut self, spot: Option<SpotId>) {
        self.controller.set_open_spot(spot);
    }

    /// Show the reply form under a comment. A form that is already open keeps its draft.
    pub fn open_reply_form(
        &mut self,
        spot: SpotId,
        comment: usize,
        payload: &SpotPayload,
    ) -> Result<(), FeedbackError> {
        if comment >= payload.comments.len() {
            return Err(FeedbackError::UnknownComment {
                spot,
                index: comment,
            });
        }
        self.forms_mut(spot)?
            .replies
            .entry(comment)
            .or_insert_with(|| TextField::new(REPLY_LABEL));
        Ok(())
    }

    /// Replace the textarea contents of an open form
    pub fn set_draft(
        &mut self,
        target: FieldTarget,
        text: impl Into<String>,
    ) -> Result<(), FeedbackError> {
        self.field_mut(target)?.value = text.into();
        Ok(())
    }

    pub fn draft(&self, target: FieldTarget) -> Option<&str> {
        let forms = self.forms.get(&target.spot())?;
        let field = match target {
            FieldTarget::Comment(_) => forms.comment.as_ref(),
            FieldTarget::Reply { comment, .. } => forms.replies.get(&comment),
        };
        field.map(|f| f.value.as_str())
    }

    /// Append the drafted comment to the payload and notify the host
    pub fn save_comment(
        &mut self,
        spot: SpotId,
        payload: &mut SpotPayload,
    ) -> Result<(), FeedbackError> {
        let text = self.field_mut(FieldTarget::Comment(spot))?.take_value();
        let comment = self.session.generate_comment(text);
        payload.comments.push(comment);
        log::debug!("Saved comment {} on {spot}", payload.comments.len() - 1);
        self.observer.on_save_comment(payload);
        Ok(())
    }

    /// Discard the comment draft, notify the host and close the open box
    pub fn cancel_comment(&mut self, spot: SpotId) -> Result<Comment, FeedbackError> {
        let text = self.field_mut(FieldTarget::Comment(spot))?.take_value();
        let comment = self.session.generate_comment(text);
        self.observer.on_cancel_comment(&comment);
        self.close_info_box();
        Ok(comment)
    }

    /// Append the drafted reply to its comment, notify the host and drop the form
    pub fn save_reply(
        &mut self,
        spot: SpotId,
        comment: usize,
        payload: &mut SpotPayload,
    ) -> Result<(), FeedbackError> {
        let owner = payload
            .comments
            .get_mut(comment)
            .ok_or(FeedbackError::UnknownComment {
                spot,
                index: comment,
            })?;
        let target = FieldTarget::Reply { spot, comment };
        let field = self
            .forms_mut(spot)?
            .replies
            .remove(&comment)
            .ok_or(FeedbackError::NoAuthoringForm(target))?;

        owner.replies.push(self.session.generate_reply(field.value));
        log::debug!("Saved reply to comment {comment} on {spot}");
        self.observer.on_save_reply(owner);
        Ok(())
    }

    /// Discard the reply draft, notify the host and close the open box.
    /// The reply form itself stays in place.
    pub fn cancel_reply(&mut self, spot: SpotId, comment: usize) -> Result<Reply, FeedbackError> {
        let text = self
            .field_mut(FieldTarget::Reply { spot, comment })?
            .take_value();
        let reply = self.session.generate_reply(text);
        self.observer.on_cancel_reply(&reply);
        self.close_info_box();
        Ok(reply)
    }

    /// Route an action raised by the rendered tree to the matching operation.
    /// The acted-on payload is always the one `payloads` holds for the action's spot.
    pub fn dispatch(
        &mut self,
        action: UiAction,
        payloads: &mut HashMap<SpotId, SpotPayload>,
    ) -> Result<(), FeedbackError> {
        match action {
            UiAction::ClickSpot(spot) => self.click_spot(spot).map(|_| ()),
            UiAction::OpenReplyForm { spot, comment } => {
                self.open_reply_form(spot, comment, payload_for(payloads, spot)?)
            }
            UiAction::SaveComment(spot) => self.save_comment(spot, payload_for(payloads, spot)?),
            UiAction::CancelComment(spot) => self.cancel_comment(spot).map(|_| ()),
            UiAction::SaveReply { spot, comment } => {
                self.save_reply(spot, comment, payload_for(payloads, spot)?)
            }
            UiAction::CancelReply { spot, comment } => self.cancel_reply(spot, comment).map(|_| ()),
        }
    }

    /// Structural tree of one marker with its box and thread
    pub fn render_spot(&self, spot: SpotId, comments: &[Comment]) -> Result<Node, FeedbackError> {
        let marker = self
            .controller
            .marker(spot)
            .ok_or(FeedbackError::UnknownSpot(spot))?;
        Ok(self.render_marker(marker, comments))
    }

    /// Every mounted marker in mount order. Spots missing from `payloads`
    /// render with an empty thread.
    pub fn render_body(&self, payloads: &HashMap<SpotId, SpotPayload>) -> Vec<Node> {
        self.controller
            .markers()
            .iter()
            .map(|marker| {
                let comments = payloads
                    .get(&marker.id)
                    .map(|p| p.comments.as_slice())
                    .unwrap_or(&[]);
                self.render_marker(marker, comments)
            })
            .collect()
    }

    fn render_marker(&self, marker: &Marker, comments: &[Comment]) -> Node {
        let info_box = marker.toggled.map(|toggled| {
            let contents = self
                .forms
                .get(&marker.id)
                .map(|forms| self.render_thread(marker.id, comments, forms))
                .unwrap_or_default();
            render::render_box(toggled, contents)
        });
        render::render_marker(marker, self.controller.is_active(marker.id), info_box)
    }

    fn render_thread(&self, spot: SpotId, comments: &[Comment], forms: &BoxForms) -> Vec<Node> {
        if !forms.thread {
            return Vec::new();
        }
        comments
            .iter()
            .enumerate()
            .map(|(index, comment)| {
                render::render_text(
                    spot,
                    index,
                    comment,
                    forms.replies.get(&index),
                    &self.display,
                )
            })
            .chain(
                forms
                    .comment
                    .as_ref()
                    .map(|field| render::render_text_field(field, FieldTarget::Comment(spot))),
            )
            .collect()
    }

    fn forms_mut(&mut self, spot: SpotId) -> Result<&mut BoxForms, FeedbackError> {
        if self.controller.marker(spot).is_none() {
            return Err(FeedbackError::UnknownSpot(spot));
        }
        self.forms
            .get_mut(&spot)
            .ok_or(FeedbackError::NoInfoBox(spot))
    }

    fn field_mut(&mut self, target: FieldTarget) -> Result<&mut TextField, FeedbackError> {
        let forms = self.forms_mut(target.spot())?;
        let field = match target {
            FieldTarget::Comment(_) => forms.comment.as_mut(),
            FieldTarget::Reply { comment, .. } => forms.replies.get_mut(&comment),
        };
        field.ok_or(FeedbackError::NoAuthoringForm(target))
    }
}

fn payload_for(
    payloads: &mut HashMap<SpotId, SpotPayload>,
    spot: SpotId,
) -> Result<&mut SpotPayload, FeedbackError> {
    payloads
        .get_mut(&spot)
        .ok_or(FeedbackError::MissingPayload(spot))
}
