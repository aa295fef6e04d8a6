use serde::{Deserialize, Serialize};

/// Top level feedback entry attached to a spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// ISO-8601 creation time
    pub datetime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub text: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// Single level response to a comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub datetime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub text: String,
}

/// Draft state of an authoring control: the label and the textarea contents
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextField {
    pub label: String,
    pub value: String,
}

impl TextField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
        }
    }

    /// Return the current draft and leave the field empty
    pub fn take_value(&mut self) -> String {
        std::mem::take(&mut self.value)
    }
}
