use crate::models::SpotId;
use crate::placement::PlacementError;
use crate::render::FieldTarget;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeedbackError {
    #[error("Marker placement failed: {0}")]
    Placement(#[from] PlacementError),
    #[error("Unknown spot: {0}")]
    UnknownSpot(SpotId),
    #[error("Spot {0} has no info box")]
    NoInfoBox(SpotId),
    #[error("Spot {spot} has no comment at index {index}")]
    UnknownComment { spot: SpotId, index: usize },
    #[error("No authoring form is open for {0:?}")]
    NoAuthoringForm(FieldTarget),
    #[error("No payload supplied for spot {0}")]
    MissingPayload(SpotId),
    #[error("Invalid datetime format: {0:?}")]
    InvalidDatetimeFormat(String),
}
