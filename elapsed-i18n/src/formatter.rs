//! Elapsed-time formatting service
//!
//! Ties the classifier to a [`LocaleRegistry`] and a [`Clock`].

use crate::locales::REFERENCE_LOCALE;
use crate::{ElapsedConfig, LocaleRegistry, PhraseTable, Result, classify};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Formats timestamps as localized "time ago" phrases.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use elapsed_i18n::{ElapsedFormatter, FixedClock};
///
/// let now = Utc::now();
/// let formatter = ElapsedFormatter::with_builtins().with_clock(FixedClock(now));
///
/// assert_eq!(formatter.format_elapsed(now - Duration::hours(72)), "3 days ago");
/// assert_eq!(
///     formatter.format_elapsed_localized(now - Duration::hours(72), "fr"),
///     "il y a 3 jours"
/// );
/// assert_eq!(formatter.format_elapsed(now + Duration::hours(1)), "not yet");
/// ```
#[derive(Debug, Clone)]
pub struct ElapsedFormatter<C: Clock = SystemClock> {
    registry: LocaleRegistry,
    clock: C,
}

impl ElapsedFormatter<SystemClock> {
    /// Formatter with only the reference locale. Same as `Default`.
    ///
    /// Use [`ElapsedFormatter::with_builtins`] for the bundled locales.
    pub fn new() -> Self {
        Self::with_registry(LocaleRegistry::new())
    }

    /// Formatter with the reference locale and the built-in locales.
    pub fn with_builtins() -> Self {
        Self::with_registry(LocaleRegistry::with_builtins())
    }

    pub fn with_registry(registry: LocaleRegistry) -> Self {
        Self {
            registry,
            clock: SystemClock,
        }
    }

    /// Build a formatter as described by `config`.
    pub fn from_config(config: &ElapsedConfig) -> Result<Self> {
        Ok(Self::with_registry(config.build_registry()?))
    }
}

impl Default for ElapsedFormatter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ElapsedFormatter<C> {
    /// Replace the clock, keeping the registry.
    pub fn with_clock<K: Clock>(self, clock: K) -> ElapsedFormatter<K> {
        ElapsedFormatter {
            registry: self.registry,
            clock,
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Phrase for `timestamp` in the reference locale.
    pub fn format_elapsed(&self, timestamp: impl Into<Option<DateTime<Utc>>>) -> String {
        self.format_elapsed_localized(timestamp, REFERENCE_LOCALE)
    }

    /// Phrase for `timestamp` in `locale`, or in the reference locale when
    /// `locale` is not registered.
    pub fn format_elapsed_localized(
        &self,
        timestamp: impl Into<Option<DateTime<Utc>>>,
        locale: &str,
    ) -> String {
        format_between(&self.registry, self.clock.now(), timestamp, locale)
    }

    /// Phrase for the time between `then` and an explicit `now`, ignoring
    /// the clock.
    pub fn format_between(
        &self,
        now: DateTime<Utc>,
        then: impl Into<Option<DateTime<Utc>>>,
        locale: &str,
    ) -> String {
        format_between(&self.registry, now, then, locale)
    }

    /// Register an additional locale.
    pub fn register_locale(&self, code: &str, table: PhraseTable) -> Result<()> {
        self.registry.register(code, table)
    }
}

/// Phrase for the time between `then` and `now` in `locale`.
pub fn format_between(
    registry: &LocaleRegistry,
    now: DateTime<Utc>,
    then: impl Into<Option<DateTime<Utc>>>,
    locale: &str,
) -> String {
    let c = classify(now, then);
    registry.resolve(c.bucket, c.magnitude, locale)
}

static DEFAULT_FORMATTER: Lazy<ElapsedFormatter> = Lazy::new(|| {
    let config = ElapsedConfig::from_env();
    ElapsedFormatter::from_config(&config).unwrap_or_else(|err| {
        elapsed_log::warn!(
            target: "elapsed::formatter",
            "Failed to apply configuration ({}), using built-in locales only", err
        );
        ElapsedFormatter::with_builtins()
    })
});

/// Process-wide formatter used by the free functions.
pub fn default_formatter() -> &'static ElapsedFormatter {
    &DEFAULT_FORMATTER
}

/// Phrase for `timestamp` in the reference locale, using the wall clock.
///
/// ```
/// use chrono::{Duration, Utc};
///
/// let phrase = elapsed_i18n::format_elapsed(Utc::now() - Duration::minutes(40));
/// assert_eq!(phrase, "40 minutes ago");
/// ```
pub fn format_elapsed(timestamp: impl Into<Option<DateTime<Utc>>>) -> String {
    default_formatter().format_elapsed(timestamp)
}

/// Phrase for `timestamp` in `locale`, using the wall clock.
pub fn format_elapsed_localized(timestamp: impl Into<Option<DateTime<Utc>>>, locale: &str) -> String {
    default_formatter().format_elapsed_localized(timestamp, locale)
}

/// Register a locale with the process-wide formatter.
pub fn register_locale(code: &str, table: PhraseTable) -> Result<()> {
    default_formatter().register_locale(code, table)
}
