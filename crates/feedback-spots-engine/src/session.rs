use crate::error::FeedbackError;
use crate::models::{Comment, Reply};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Source of "now" for new records
pub type Clock = fn() -> DateTime<Utc>;

/// `month/day/year, hour:minute:second AM|PM`
pub const DEFAULT_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const UNKNOWN_USER: &str = "unknown user";
const INVALID_DATE: &str = "Invalid Date";

/// Read-only session data used to attribute new comments and replies
#[derive(Debug, Clone)]
pub struct Session {
    current_user: Option<String>,
    clock: Clock,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Session {
    pub fn new(current_user: Option<String>) -> Self {
        Self {
            current_user,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Current time as ISO-8601 with milliseconds and a `Z` suffix
    pub fn timestamp(&self) -> String {
        (self.clock)().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn generate_comment(&self, text: impl Into<String>) -> Comment {
        Comment {
            datetime: self.timestamp(),
            user: self.current_user.clone(),
            text: text.into(),
            replies: Vec::new(),
        }
    }

    pub fn generate_reply(&self, text: impl Into<String>) -> Reply {
        Reply {
            datetime: self.timestamp(),
            user: self.current_user.clone(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTimezone {
    #[default]
    Local,
    Utc,
}

/// Renders stored ISO-8601 timestamps for attribution lines
#[derive(Debug, Clone, PartialEq)]
pub struct DatetimeDisplay {
    timezone: DisplayTimezone,
    format: String,
}

impl Default for DatetimeDisplay {
    fn default() -> Self {
        Self {
            timezone: DisplayTimezone::Local,
            format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl DatetimeDisplay {
    pub fn new(timezone: DisplayTimezone, format: impl Into<String>) -> Result<Self, FeedbackError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(FeedbackError::InvalidDatetimeFormat(format));
        }
        Ok(Self { timezone, format })
    }

    pub fn utc() -> Self {
        Self {
            timezone: DisplayTimezone::Utc,
            ..Self::default()
        }
    }

    pub fn timezone(&self) -> DisplayTimezone {
        self.timezone
    }

    /// Localized form of `datetime`, or `Invalid Date` when it cannot be parsed
    pub fn format(&self, datetime: &str) -> String {
        let Some(parsed) = parse_datetime(datetime) else {
            return INVALID_DATE.to_string();
        };
        match self.timezone {
            DisplayTimezone::Local => parsed
                .with_timezone(&Local)
                .format(&self.format)
                .to_string(),
            DisplayTimezone::Utc => parsed.format(&self.format).to_string(),
        }
    }

    /// `By {user} at {datetime}`; a missing or empty user shows as `unknown user`
    pub fn attribution(&self, user: Option<&str>, datetime: &str) -> String {
        let user = user.filter(|u| !u.is_empty()).unwrap_or(UNKNOWN_USER);
        format!("By {user} at {}", self.format(datetime))
    }
}

/// Date-times without an offset, read as local time
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_datetime(datetime: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(datetime) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(utc) = datetime.strip_suffix('Z') {
        // RFC 3339 requires seconds; `2024-01-02T03:04Z` is still valid ISO-8601
        return NaiveDateTime::parse_from_str(utc, "%Y-%m-%dT%H:%M")
            .ok()
            .map(|naive| naive.and_utc());
    }
    if let Some(naive) = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(datetime, format).ok())
    {
        // Wall-clock times skipped by a DST change have no instant
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc));
    }
    // Date-only strings are taken as UTC midnight
    NaiveDate::parse_from_str(datetime, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixed_now;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_timestamp_is_iso_with_millis() {
        let session = Session::default().with_clock(fixed_now);

        assert_eq!(session.timestamp(), "2024-01-02T03:04:05.678Z");
    }

    #[test]
    fn test_generate_comment_uses_current_user() {
        let session = Session::new(Some("alice".to_string())).with_clock(fixed_now);

        let comment = session.generate_comment("Hello");

        assert_eq!(
            comment,
            Comment {
                datetime: "2024-01-02T03:04:05.678Z".to_string(),
                user: Some("alice".to_string()),
                text: "Hello".to_string(),
                replies: vec![],
            }
        );
    }

    #[test]
    fn test_generate_reply_without_user() {
        let session = Session::default().with_clock(fixed_now);

        let reply = session.generate_reply("");

        assert_eq!(reply.user, None);
        assert_eq!(reply.text, "");
        assert_eq!(reply.datetime, "2024-01-02T03:04:05.678Z");
    }

    #[rstest]
    #[case("2024-01-02T03:04:05.678Z", "1/2/2024, 3:04:05 AM")]
    #[case("2023-12-31T23:59:59Z", "12/31/2023, 11:59:59 PM")]
    #[case("2024-06-15T14:30:00+02:00", "6/15/2024, 12:30:00 PM")]
    #[case("2024-03-09", "3/9/2024, 12:00:00 AM")]
    #[case("2024-01-02T03:04Z", "1/2/2024, 3:04:00 AM")]
    #[case("2024-01-02T03:04:05.678+00:00", "1/2/2024, 3:04:05 AM")]
    #[case("yesterday", "Invalid Date")]
    fn test_utc_formatting(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(DatetimeDisplay::utc().format(input), expected);
    }

    fn local_wall_clock(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|date| date.and_hms_milli_opt(h, m, s, ms))
            .unwrap()
    }

    #[rstest]
    #[case("2024-01-02T03:04:05", local_wall_clock(3, 4, 5, 0))]
    #[case("2024-01-02T03:04:05.678", local_wall_clock(3, 4, 5, 678))]
    #[case("2024-01-02T03:04", local_wall_clock(3, 4, 0, 0))]
    fn test_offsetless_datetimes_are_local(#[case] input: &str, #[case] wall_clock: NaiveDateTime) {
        let instant = Local
            .from_local_datetime(&wall_clock)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(
            DatetimeDisplay::utc().format(input),
            instant.format(DEFAULT_DATETIME_FORMAT).to_string()
        );
        assert_eq!(
            DatetimeDisplay::default().format(input),
            wall_clock.format(DEFAULT_DATETIME_FORMAT).to_string()
        );
    }

    #[rstest]
    #[case("2024-01-02T03")]
    #[case("2024-01-02T03:04:05 extra")]
    #[case("2024-13-02T03:04:05")]
    fn test_malformed_datetimes_are_invalid(#[case] input: &str) {
        assert_eq!(DatetimeDisplay::utc().format(input), "Invalid Date");
    }

    #[test]
    fn test_attribution_with_user() {
        let display = DatetimeDisplay::utc();

        assert_eq!(
            display.attribution(Some("bob"), "2024-01-02T03:04:05.678Z"),
            "By bob at 1/2/2024, 3:04:05 AM"
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn test_attribution_without_user(#[case] user: Option<&str>) {
        let display = DatetimeDisplay::utc();

        assert_eq!(
            display.attribution(user, "2024-01-02T03:04:05.678Z"),
            "By unknown user at 1/2/2024, 3:04:05 AM"
        );
    }

    #[test]
    fn test_custom_format() {
        let display = DatetimeDisplay::new(DisplayTimezone::Utc, "%Y-%m-%d %H:%M").unwrap();

        assert_eq!(display.format("2024-01-02T03:04:05.678Z"), "2024-01-02 03:04");
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = DatetimeDisplay::new(DisplayTimezone::Utc, "%Q");

        assert_eq!(
            result,
            Err(FeedbackError::InvalidDatetimeFormat("%Q".to_string()))
        );
    }

    #[test]
    fn test_local_display_matches_chrono_local() {
        let display = DatetimeDisplay::default();
        let expected = fixed_now()
            .with_timezone(&Local)
            .format(DEFAULT_DATETIME_FORMAT)
            .to_string();

        assert_eq!(display.format("2024-01-02T03:04:05.678Z"), expected);
    }
}
