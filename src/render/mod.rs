//! Text renderings of an [`ElapsedBreakdown`].
//!
//! Two variants exist: a digital-clock style with zero-padded segments, and a
//! prose sentence with pluralized units.

use crate::counter::{CounterError, CounterResult, ElapsedBreakdown};
use std::fmt;
use std::str::FromStr;

/// Separator drawn between segments in the plain-text digital clock.
pub const SEGMENT_SEPARATOR: &str = ":";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayVariant {
    #[default]
    Segmented,
    Prose,
}

impl FromStr for DisplayVariant {
    type Err = CounterError;

    fn from_str(s: &str) -> CounterResult<Self> {
        match s {
            "segmented" | "clock" => Ok(DisplayVariant::Segmented),
            "prose" | "text" => Ok(DisplayVariant::Prose),
            other => Err(CounterError::InvalidArgument {
                flag: "--variant",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayVariant::Segmented => write!(f, "segmented"),
            DisplayVariant::Prose => write!(f, "prose"),
        }
    }
}

/// One labeled field of the digital clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub digits: String,
    pub label: &'static str,
}

/// Left-pads the decimal form of `value` with zeros up to `width` characters.
/// A leading minus sign counts toward the width and is padded like any other character.
pub fn pad(value: i64, width: usize) -> String {
    format!("{:0>width$}", value.to_string(), width = width)
}

/// The five clock segments, in display order.
pub fn segments(b: &ElapsedBreakdown) -> [Segment; 5] {
    [
        Segment { digits: pad(b.years, 2), label: "Years" },
        Segment { digits: pad(b.days, 3), label: "Days" },
        Segment { digits: pad(b.hours, 2), label: "Hours" },
        Segment { digits: pad(b.minutes, 2), label: "Minutes" },
        Segment { digits: pad(b.seconds, 2), label: "Seconds" },
    ]
}

/// `YY:DDD:HH:MM:SS`
pub fn segmented_line(b: &ElapsedBreakdown) -> String {
    segments(b)
        .iter()
        .map(|s| s.digits.as_str())
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// "X years, Y days, H hours, M minutes, and S seconds"
pub fn prose_sentence(b: &ElapsedBreakdown) -> String {
    format!(
        "{} year{}, {} day{}, {} hour{}, {} minute{}, and {} second{}",
        b.years,
        plural(b.years),
        b.days,
        plural(b.days),
        b.hours,
        plural(b.hours),
        b.minutes,
        plural(b.minutes),
        b.seconds,
        plural(b.seconds)
    )
}

/// Single-line text for the given variant.
pub fn render_line(variant: DisplayVariant, b: &ElapsedBreakdown) -> String {
    match variant {
        DisplayVariant::Segmented => segmented_line(b),
        DisplayVariant::Prose => prose_sentence(b),
    }
}
