use feedback_spots_config::{DisplayConfig, Timezone};
use feedback_spots_engine::{DatetimeDisplay, DisplayTimezone, FeedbackError};

/// Attribution datetime display described by the `[display]` config table
pub fn datetime_display(config: &DisplayConfig) -> Result<DatetimeDisplay, FeedbackError> {
    let timezone = match config.timezone {
        Timezone::Local => DisplayTimezone::Local,
        Timezone::Utc => DisplayTimezone::Utc,
    };
    DatetimeDisplay::new(timezone, config.datetime_format.as_str())
}
