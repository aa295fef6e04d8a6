use crate::models::{Comment, PositionDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a mounted marker, unique across widget instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpotId(pub Uuid);

impl SpotId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spot-{}", self.0.simple())
    }
}

/// A clickable point placed over page content
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: SpotId,
    /// Page x coordinate in pixels
    pub left: f64,
    /// Page y coordinate in pixels
    pub top: f64,
    /// Whether clicking opens the box; `None` until a box is attached
    pub toggled: Option<bool>,
}

impl Marker {
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            id: SpotId::new(),
            left,
            top,
            toggled: None,
        }
    }

    pub fn has_box(&self) -> bool {
        self.toggled.is_some()
    }
}

/// Host owned data for one spot. Saves push into `comments` in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotPayload {
    pub position: PositionDescriptor,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_ids_are_unique() {
        assert_ne!(SpotId::new(), SpotId::new());
    }

    #[test]
    fn test_spot_id_display_is_dom_safe() {
        let id = SpotId::new().to_string();

        assert!(id.starts_with("spot-"));
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }

    #[test]
    fn test_new_marker_has_no_box() {
        let marker = Marker::new(1.0, 2.0);

        assert!(!marker.has_box());
        assert_eq!((marker.left, marker.top), (1.0, 2.0));
    }

    #[test]
    fn test_payload_defaults_to_no_comments() {
        let json = r#"{ "position": { "container": "body", "positioning": "pixel", "offset": [0, 0] } }"#;

        let payload: SpotPayload = serde_json::from_str(json).unwrap();

        assert!(payload.comments.is_empty());
    }
}
