pub mod fixture;
pub mod observer;
pub mod settings;
pub mod state;
pub mod ui;

pub use fixture::{Fixture, FixtureSpot};
pub use observer::LoggingObserver;
pub use state::PageState;
