use crate::error::FeedbackError;
use crate::models::{Marker, SpotId};

/// Owns the mounted markers of one widget and which of them is open.
///
/// At most one marker is active at a time. Activating a marker always closes
/// the previously active one first.
#[derive(Debug, Clone, Default)]
pub struct SpotController {
    markers: Vec<Marker>,
    open_spot: Option<SpotId>,
}

impl SpotController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker to the body; markers are never removed
    pub fn mount(&mut self, marker: Marker) -> SpotId {
        let id = marker.id;
        self.markers.push(marker);
        id
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, spot: SpotId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == spot)
    }

    /// Attach a box to `spot`. Only toggled boxes open and close on click.
    pub fn attach_box(&mut self, spot: SpotId, toggled: bool) -> Result<(), FeedbackError> {
        let marker = self
            .markers
            .iter_mut()
            .find(|m| m.id == spot)
            .ok_or(FeedbackError::UnknownSpot(spot))?;
        marker.toggled = Some(toggled);
        Ok(())
    }

    /// Handle a click on a marker. Returns whether the open spot changed.
    pub fn click(&mut self, spot: SpotId) -> Result<bool, FeedbackError> {
        let marker = self.marker(spot).ok_or(FeedbackError::UnknownSpot(spot))?;
        if marker.toggled != Some(true) {
            return Ok(false);
        }

        if self.open_spot == Some(spot) {
            log::debug!("Closing {spot}");
            self.open_spot = None;
        } else {
            self.close_info_box();
            log::debug!("Opening {spot}");
            self.open_spot = Some(spot);
        }
        Ok(true)
    }

    /// Close whichever box is open. Does nothing when none is.
    pub fn close_info_box(&mut self) {
        if let Some(spot) = self.open_spot.take() {
            log::debug!("Closing {spot}");
        }
    }

    pub fn is_active(&self, spot: SpotId) -> bool {
        self.open_spot == Some(spot)
    }

    pub fn open_spot(&self) -> Option<SpotId> {
        self.open_spot
    }

    /// Overwrite the open spot directly, bypassing click handling
    pub fn set_open_spot(&mut self, spot: Option<SpotId>) {
        self.open_spot = spot;
    }
}
