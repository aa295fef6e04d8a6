//! Structural description of the widget's markup.
//!
//! Rendering functions return a [`Node`] tree instead of touching a live
//! document. A UI layer walks the tree, applies the class names from
//! [`classes`] and forwards clicks and textarea input back as [`UiAction`]s
//! and [`FieldTarget`]s.

pub mod spot;
pub mod thread;

pub use spot::{render_box, render_marker};
pub use thread::{render_attribution, render_reply, render_text, render_text_field};

use crate::models::SpotId;
use std::fmt::Write;

/// Class names the host stylesheet targets
pub mod classes {
    pub const FEEDBACK_SPOT: &str = "feedback-spot";
    pub const ACTIVE: &str = "active";
    pub const FEEDBACK_BOX: &str = "feedback-box";
    pub const TOGGLED: &str = "toggled";
    pub const FEEDBACK_CONTAINER: &str = "feedback-container";
    pub const FEEDBACK_TEXT: &str = "feedback-text";
    pub const FEEDBACK_INFO: &str = "feedback-info";
    pub const REPLY_BUTTON: &str = "reply-button";
    pub const REPLIES_CONTAINER: &str = "replies-container";
    pub const REPLY_CONTAINER: &str = "reply-container";
    pub const FEEDBACK_REPLY: &str = "feedback-reply";
    pub const BUTTON_HOLDER: &str = "button-holder";
    pub const CANCEL_BUTTON: &str = "cancel-button";
    pub const SAVE_BUTTON: &str = "save-button";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Anchor,
    Label,
    TextArea,
    Button,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Anchor => "a",
            Tag::Label => "label",
            Tag::TextArea => "textarea",
            Tag::Button => "button",
        }
    }
}

/// Which draft a textarea edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTarget {
    /// The new-comment form of a spot
    Comment(SpotId),
    /// The reply form under comment `comment` of a spot
    Reply { spot: SpotId, comment: usize },
}

impl FieldTarget {
    pub fn spot(&self) -> SpotId {
        match *self {
            FieldTarget::Comment(spot) | FieldTarget::Reply { spot, .. } => spot,
        }
    }

    pub fn save_action(&self) -> UiAction {
        match *self {
            FieldTarget::Comment(spot) => UiAction::SaveComment(spot),
            FieldTarget::Reply { spot, comment } => UiAction::SaveReply { spot, comment },
        }
    }

    pub fn cancel_action(&self) -> UiAction {
        match *self {
            FieldTarget::Comment(spot) => UiAction::CancelComment(spot),
            FieldTarget::Reply { spot, comment } => UiAction::CancelReply { spot, comment },
        }
    }
}

/// A user action raised by a clickable node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiAction {
    ClickSpot(SpotId),
    OpenReplyForm { spot: SpotId, comment: usize },
    SaveComment(SpotId),
    CancelComment(SpotId),
    SaveReply { spot: SpotId, comment: usize },
    CancelReply { spot: SpotId, comment: usize },
}

impl UiAction {
    pub fn spot(&self) -> SpotId {
        match *self {
            UiAction::ClickSpot(spot)
            | UiAction::SaveComment(spot)
            | UiAction::CancelComment(spot)
            | UiAction::OpenReplyForm { spot, .. }
            | UiAction::SaveReply { spot, .. }
            | UiAction::CancelReply { spot, .. } => spot,
        }
    }
}

/// One element of the rendered tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub classes: Vec<&'static str>,
    /// Leading text content; for a textarea, its value
    pub text: Option<String>,
    pub attributes: Vec<(&'static str, String)>,
    pub style: Option<String>,
    pub on_click: Option<UiAction>,
    /// Clicks on this node never reach its ancestors
    pub stops_propagation: bool,
    pub prevents_default: bool,
    /// Draft edited by this textarea
    pub binding: Option<FieldTarget>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            text: None,
            attributes: Vec::new(),
            style: None,
            on_click: None,
            stops_propagation: false,
            prevents_default: false,
            binding: None,
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn on_click(mut self, action: UiAction) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn stop_propagation(mut self) -> Self {
        self.stops_propagation = true;
        self
    }

    pub fn prevent_default(mut self) -> Self {
        self.prevents_default = true;
        self
    }

    pub fn bind(mut self, target: FieldTarget) -> Self {
        self.binding = Some(target);
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Space separated class list, as written to the `class` attribute
    pub fn class_list(&self) -> String {
        self.classes.join(" ")
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All descendants (and self) carrying `class`, in document order
    pub fn find_all(&self, class: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect(&|node: &Node| node.has_class(class), &mut found);
        found
    }

    pub fn find(&self, class: &str) -> Option<&Node> {
        self.find_all(class).into_iter().next()
    }

    /// First node in document order raising `action` on click
    pub fn find_action(&self, action: UiAction) -> Option<&Node> {
        let mut found = Vec::new();
        self.collect(&|node: &Node| node.on_click == Some(action), &mut found);
        found.into_iter().next()
    }

    /// Textareas bound to drafts, in document order
    pub fn fields(&self) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect(&|node: &Node| node.binding.is_some(), &mut found);
        found
    }

    fn collect<'a>(&'a self, matches: &dyn Fn(&Node) -> bool, found: &mut Vec<&'a Node>) {
        if matches(self) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(matches, found);
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.push_text(out);
        }
    }

    /// Indented one-line-per-node listing, handy for snapshots and logs
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(0, &mut out);
        out
    }

    fn write_outline(&self, depth: usize, out: &mut String) {
        let _ = write!(out, "{}{}", "  ".repeat(depth), self.tag.name());
        for class in &self.classes {
            let _ = write!(out, ".{class}");
        }
        if let Some(text) = &self.text {
            let _ = write!(out, " {text:?}");
        }
        out.push('\n');
        for child in &self.children {
            child.write_outline(depth + 1, out);
        }
    }
}
