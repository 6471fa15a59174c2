//! Localized "time ago" phrases
//!
//! Turns a point in time into a short phrase such as "3 days ago" or
//! "il y a 3 jours":
//!
//! - **Classification**: elapsed time is mapped to a [`Bucket`]
//!   (just now, minutes, hours, yesterday, days, weeks, months, years)
//!   and a magnitude
//! - **Phrase tables**: each locale has one template per bucket, with
//!   singular and plural forms as separate buckets
//! - **Registry**: locales are registered at runtime; unknown locales
//!   fall back to English
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use elapsed_i18n::{Bucket, ElapsedFormatter, FixedClock, PhraseTable, locales};
//!
//! let now = Utc::now();
//! let formatter = ElapsedFormatter::new().with_clock(FixedClock(now));
//!
//! assert_eq!(formatter.format_elapsed(now - Duration::hours(1)), "1 hour ago");
//!
//! // Register a locale; it must cover every bucket English does
//! let pirate = locales::english().with(Bucket::Days, "%d days past, arr");
//! formatter.register_locale("pirate", pirate).unwrap();
//! assert_eq!(
//!     formatter.format_elapsed_localized(now - Duration::days(3), "pirate"),
//!     "3 days past, arr"
//! );
//! ```
//!
//! # Rounding
//!
//! Minutes, hours and days count whole elapsed units. Weeks, months (30
//! days) and years (365 days) round up, and a fourth week or twelfth month
//! is reported in the next larger unit: 28 days is "1 month ago", 360 days
//! is "1 year ago".

mod bucket;
mod classify;
mod config;
mod error;
mod formatter;
pub mod locales;
mod phrase;
mod registry;

pub use bucket::Bucket;
pub use classify::{
    Classification, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, classify,
    classify_duration, classify_seconds,
};
pub use config::ElapsedConfig;
pub use error::{ElapsedError, RegistrationError};
pub use formatter::{
    Clock, ElapsedFormatter, FixedClock, SystemClock, default_formatter, format_between,
    format_elapsed, format_elapsed_localized, register_locale,
};
pub use locales::REFERENCE_LOCALE;
pub use phrase::PhraseTable;
pub use registry::LocaleRegistry;

/// Result type for elapsed operations
pub type Result<T> = std::result::Result<T, ElapsedError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Bucket, Clock, ElapsedConfig, ElapsedError, ElapsedFormatter, FixedClock, LocaleRegistry,
        PhraseTable, Result, SystemClock, classify, format_elapsed, format_elapsed_localized,
        register_locale,
    };
}
