//! Bucket classification
//!
//! Maps an elapsed duration to a [`Bucket`] and a magnitude. Rules are
//! tried top to bottom and the first one that produces a classification
//! wins. A rule that declines (returns `None`) lets the next rule handle
//! the span, which is how a fourth week becomes a month and a twelfth
//! month becomes a year.

use crate::Bucket;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

const DAYS_PER_WEEK: u64 = 7;
const DAYS_PER_MONTH: u64 = 30;
const DAYS_PER_YEAR: u64 = 365;

/// Result of classifying an elapsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub bucket: Bucket,
    /// Count substituted into the phrase; 0 for uncounted buckets
    pub magnitude: u64,
}

impl Classification {
    fn uncounted(bucket: Bucket) -> Self {
        Self { bucket, magnitude: 0 }
    }

    fn counted(magnitude: u64, singular: Bucket, plural: Bucket) -> Self {
        Self {
            bucket: Bucket::by_count(magnitude, singular, plural),
            magnitude,
        }
    }
}

/// Non-negative elapsed time, in seconds and whole days.
#[derive(Debug, Clone, Copy)]
struct Span {
    seconds: u64,
    days: u64,
}

type Rule = fn(Span) -> Option<Classification>;

const RULES: &[Rule] = &[
    just_now,
    minutes,
    hours,
    yesterday,
    days,
    weeks,
    months,
    years,
];

fn just_now(span: Span) -> Option<Classification> {
    (span.seconds < SECONDS_PER_MINUTE as u64).then(|| Classification::uncounted(Bucket::JustNow))
}

fn minutes(span: Span) -> Option<Classification> {
    (span.seconds < SECONDS_PER_HOUR as u64).then(|| {
        let n = span.seconds / SECONDS_PER_MINUTE as u64;
        Classification::counted(n, Bucket::Minute, Bucket::Minutes)
    })
}

fn hours(span: Span) -> Option<Classification> {
    (span.seconds < SECONDS_PER_DAY as u64).then(|| {
        let n = span.seconds / SECONDS_PER_HOUR as u64;
        Classification::counted(n, Bucket::Hour, Bucket::Hours)
    })
}

fn yesterday(span: Span) -> Option<Classification> {
    (span.days == 1).then(|| Classification::uncounted(Bucket::Yesterday))
}

fn days(span: Span) -> Option<Classification> {
    (span.days < DAYS_PER_WEEK)
        .then(|| Classification::counted(span.days, Bucket::Day, Bucket::Days))
}

// Declines a fourth week so it is reported as a month.
fn weeks(span: Span) -> Option<Classification> {
    if span.days >= 31 {
        return None;
    }
    let n = span.days.div_ceil(DAYS_PER_WEEK);
    (n < 4).then(|| Classification::counted(n, Bucket::Week, Bucket::Weeks))
}

// Declines a twelfth month so it is reported as a year.
fn months(span: Span) -> Option<Classification> {
    if span.days >= DAYS_PER_YEAR {
        return None;
    }
    let n = span.days.div_ceil(DAYS_PER_MONTH);
    (n < 12).then(|| Classification::counted(n, Bucket::Month, Bucket::Months))
}

fn years(span: Span) -> Option<Classification> {
    let n = span.days.div_ceil(DAYS_PER_YEAR);
    Some(Classification::counted(n, Bucket::Year, Bucket::Years))
}

/// Classify a number of elapsed seconds.
///
/// Negative input means the moment has not happened yet.
pub fn classify_seconds(elapsed_seconds: i64) -> Classification {
    if elapsed_seconds < 0 {
        return Classification::uncounted(Bucket::NotYet);
    }
    let seconds = elapsed_seconds as u64;
    let span = Span {
        seconds,
        days: seconds / SECONDS_PER_DAY as u64,
    };

    RULES
        .iter()
        .find_map(|rule| rule(span))
        .unwrap_or_else(|| Classification::uncounted(Bucket::NotYet))
}

/// Classify a signed duration (`now - then`).
///
/// Any negative duration, however small, is [`Bucket::NotYet`].
pub fn classify_duration(elapsed: Duration) -> Classification {
    if elapsed < Duration::zero() {
        return Classification::uncounted(Bucket::NotYet);
    }
    classify_seconds(elapsed.num_seconds())
}

/// Classify the time between `then` and `now`.
///
/// An unset (`None`) or future `then` yields [`Bucket::NotYet`].
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use elapsed_i18n::{Bucket, classify};
///
/// let now = Utc::now();
/// let c = classify(now, now - Duration::days(3));
/// assert_eq!(c.bucket, Bucket::Days);
/// assert_eq!(c.magnitude, 3);
///
/// assert_eq!(classify(now, None).bucket, Bucket::NotYet);
/// ```
pub fn classify(now: DateTime<Utc>, then: impl Into<Option<DateTime<Utc>>>) -> Classification {
    match then.into() {
        Some(then) if then <= now => classify_duration(now - then),
        _ => Classification::uncounted(Bucket::NotYet),
    }
}
