use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed clock for deterministic record timestamps
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + Duration::milliseconds(678)
}
