pub mod controller;
pub mod error;
pub mod events;
pub mod layout;
pub mod models;
pub mod placement;
pub mod render;
pub mod session;
pub mod widget;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use controller::SpotController;
pub use error::FeedbackError;
pub use events::{EventLog, FeedbackEvent, FeedbackObserver};
pub use layout::{ContainerRect, PageLayout, StaticLayout};
pub use models::{
    Comment, ContainerSize, Marker, PositionDescriptor, Positioning, Reply, SpotId, SpotPayload,
    TextField,
};
pub use placement::PlacementError;
pub use render::{FieldTarget, Node, Tag, UiAction, classes};
pub use session::{DatetimeDisplay, DisplayTimezone, Session};
pub use widget::{BoxParts, FeedbackWidget};
