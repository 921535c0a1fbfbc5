// Elapsed-time breakdown since the origin instant.
// Years are a flat 365 days; leap days and month lengths are ignored on purpose
// so the numbers match what the counter has always shown.
use super::error::{CounterError, CounterResult};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Instant the counter measures from.
pub const ORIGIN_RFC3339: &str = "2019-01-03T00:00:00Z";

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
pub const DAYS_PER_YEAR: i64 = 365;

/// Parses [`ORIGIN_RFC3339`].
pub fn origin_instant() -> CounterResult<OffsetDateTime> {
    OffsetDateTime::parse(ORIGIN_RFC3339, &Rfc3339).map_err(|source| CounterError::OriginParse {
        value: ORIGIN_RFC3339,
        source,
    })
}

/// Whole years, remainder days, hours, minutes and seconds between two instants.
///
/// All fields are non-negative whenever `now >= origin`. Before the origin the
/// arithmetic is left unguarded and fields go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElapsedBreakdown {
    pub years: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ElapsedBreakdown {
    /// Breakdown of `now - origin`.
    pub fn between(origin: OffsetDateTime, now: OffsetDateTime) -> Self {
        let diff_ms = (now - origin).whole_milliseconds() as i64;
        Self::from_millis(diff_ms)
    }

    /// Breakdown of a raw millisecond difference.
    ///
    /// Division floors, remainders keep the sign of the dividend.
    pub fn from_millis(diff_ms: i64) -> Self {
        let total_days = diff_ms.div_euclid(MS_PER_DAY);
        Self {
            years: total_days.div_euclid(DAYS_PER_YEAR),
            days: total_days % DAYS_PER_YEAR,
            hours: (diff_ms % MS_PER_DAY).div_euclid(MS_PER_HOUR),
            minutes: (diff_ms % MS_PER_HOUR).div_euclid(MS_PER_MINUTE),
            seconds: (diff_ms % MS_PER_MINUTE).div_euclid(MS_PER_SECOND),
        }
    }
}
