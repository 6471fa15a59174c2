//! Elapsed-time buckets
//!
//! A bucket names the granularity a phrase is written at. Singular and
//! plural forms are separate buckets rather than one bucket plus a count,
//! so each language can word "1 week" and "3 weeks" independently.

use crate::{ElapsedError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Granularity category selected by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    /// Timestamp is unset or in the future
    NotYet,
    /// Less than a minute ago
    JustNow,
    Minute,
    Minutes,
    Hour,
    Hours,
    /// Exactly one whole day ago
    Yesterday,
    Day,
    Days,
    Week,
    Weeks,
    Month,
    Months,
    Year,
    Years,
}

impl Bucket {
    /// Every bucket, in classification order.
    pub const ALL: [Bucket; 15] = [
        Bucket::NotYet,
        Bucket::JustNow,
        Bucket::Minute,
        Bucket::Minutes,
        Bucket::Hour,
        Bucket::Hours,
        Bucket::Yesterday,
        Bucket::Day,
        Bucket::Days,
        Bucket::Week,
        Bucket::Weeks,
        Bucket::Month,
        Bucket::Months,
        Bucket::Year,
        Bucket::Years,
    ];

    /// Key used for this bucket in phrase files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotYet => "not_yet",
            Self::JustNow => "just_now",
            Self::Minute => "minute",
            Self::Minutes => "minutes",
            Self::Hour => "hour",
            Self::Hours => "hours",
            Self::Yesterday => "yesterday",
            Self::Day => "day",
            Self::Days => "days",
            Self::Week => "week",
            Self::Weeks => "weeks",
            Self::Month => "month",
            Self::Months => "months",
            Self::Year => "year",
            Self::Years => "years",
        }
    }

    /// Whether phrases in this bucket carry a magnitude.
    pub fn is_counted(&self) -> bool {
        !matches!(self, Self::NotYet | Self::JustNow | Self::Yesterday)
    }

    /// Pick the singular or plural bucket for a count.
    ///
    /// Only a count of exactly one is singular; zero is plural.
    pub(crate) fn by_count(count: u64, singular: Bucket, plural: Bucket) -> Bucket {
        if count == 1 { singular } else { plural }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = ElapsedError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ElapsedError::UnknownBucket(s.to_string()))
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Bucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
