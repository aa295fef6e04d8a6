use crate::fixture::Fixture;
use crate::observer::LoggingObserver;
use feedback_spots_engine::{
    DatetimeDisplay, FeedbackError, FeedbackEvent, FeedbackWidget, FieldTarget, Node, Session,
    SpotId, SpotPayload, StaticLayout, UiAction,
};
use std::collections::HashMap;

/// Everything the desktop page shows: the widget, the comment collections it
/// writes into and any spots that could not be placed.
pub struct PageState {
    widget: FeedbackWidget<LoggingObserver>,
    payloads: HashMap<SpotId, SpotPayload>,
    layout: StaticLayout,
    errors: Vec<String>,
}

impl PageState {
    /// Mount every fixture spot. Spots that fail to place are skipped and
    /// reported through [`PageState::errors`].
    pub fn build(fixture: &Fixture, session: Session, display: DatetimeDisplay) -> Self {
        let mut state = Self {
            widget: FeedbackWidget::new(session, LoggingObserver::default()).with_display(display),
            payloads: HashMap::new(),
            layout: fixture.containers.clone(),
            errors: Vec::new(),
        };

        for (index, spot) in fixture.spots.iter().enumerate() {
            if let Err(e) = state.mount(spot.payload.clone(), spot.read_only) {
                log::warn!("Skipping spot {index}: {e}");
                state.errors.push(format!("Spot {index}: {e}"));
            }
        }

        log::info!(
            "Mounted {} of {} spot(s)",
            state.payloads.len(),
            fixture.spots.len()
        );
        state
    }

    fn mount(&mut self, payload: SpotPayload, read_only: bool) -> Result<SpotId, FeedbackError> {
        let spot = self.widget.create_marker(&self.layout, &payload.position)?;
        if read_only {
            self.widget.create_read_only_box(spot)?;
        } else {
            self.widget.create_info_box(spot)?;
        }
        self.payloads.insert(spot, payload);
        Ok(spot)
    }

    pub fn layout(&self) -> &StaticLayout {
        &self.layout
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn widget(&self) -> &FeedbackWidget<LoggingObserver> {
        &self.widget
    }

    pub fn payload(&self, spot: SpotId) -> Option<&SpotPayload> {
        self.payloads.get(&spot)
    }

    /// Mounted spots in mount order
    pub fn spots(&self) -> Vec<SpotId> {
        self.widget.markers().iter().map(|m| m.id).collect()
    }

    pub fn events(&self) -> &[FeedbackEvent] {
        self.widget.observer().events()
    }

    pub fn dispatch(&mut self, action: UiAction) -> Result<(), FeedbackError> {
        self.widget.dispatch(action, &mut self.payloads)
    }

    pub fn set_draft(&mut self, target: FieldTarget, text: String) -> Result<(), FeedbackError> {
        self.widget.set_draft(target, text)
    }

    /// A click that reached the page background
    pub fn close_info_box(&mut self) {
        self.widget.close_info_box();
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.widget.render_body(&self.payloads)
    }
}
