//! Integration tests for elapsed-i18n

use chrono::{DateTime, Duration, TimeZone, Utc};
use elapsed_i18n::*;
use std::path::PathBuf;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap()
}

fn formatter() -> ElapsedFormatter<FixedClock> {
    ElapsedFormatter::with_builtins().with_clock(FixedClock(now()))
}

fn bundled_locales() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("locales")
}

#[test]
fn test_documented_scenarios() {
    let f = formatter();
    let t = now();

    assert_eq!(f.format_elapsed(t - Duration::hours(1)), "1 hour ago");
    assert_eq!(f.format_elapsed(t - Duration::hours(72)), "3 days ago");
    assert_eq!(f.format_elapsed(t + Duration::hours(1)), "not yet");
    assert_eq!(f.format_elapsed(t - Duration::minutes(40)), "40 minutes ago");
    assert_eq!(f.format_elapsed(t - Duration::days(365 * 3)), "3 years ago");
    assert_eq!(
        f.format_elapsed_localized(t - Duration::hours(72), "fr"),
        "il y a 3 jours"
    );
}

#[test]
fn test_boundaries() {
    let f = formatter();
    let t = now();

    assert_eq!(f.format_elapsed(t - Duration::seconds(59)), "just now");
    assert_eq!(f.format_elapsed(t - Duration::seconds(60)), "1 minute ago");
    assert_eq!(f.format_elapsed(t - Duration::seconds(3_599)), "59 minutes ago");
    assert_eq!(f.format_elapsed(t - Duration::seconds(3_600)), "1 hour ago");
    assert_eq!(f.format_elapsed(t - Duration::seconds(86_399)), "23 hours ago");
    assert_eq!(f.format_elapsed(t - Duration::seconds(86_400)), "Yesterday");
    assert_eq!(f.format_elapsed(t - Duration::days(2)), "2 days ago");
}

#[test]
fn test_rollovers() {
    let f = formatter();
    let t = now();

    assert_eq!(f.format_elapsed(t - Duration::days(8)), "2 weeks ago");
    assert_eq!(f.format_elapsed(t - Duration::days(21)), "3 weeks ago");
    assert_eq!(f.format_elapsed(t - Duration::days(28)), "1 month ago");
    assert_eq!(f.format_elapsed(t - Duration::days(330)), "11 months ago");
    assert_eq!(f.format_elapsed(t - Duration::days(360)), "1 year ago");
}

#[test]
fn test_unset_timestamp() {
    let f = formatter();
    assert_eq!(f.format_elapsed(None), "not yet");
    assert_eq!(f.format_elapsed_localized(None, "de"), "noch nicht");
}

#[test]
fn test_unknown_locale_matches_reference() {
    let f = formatter();
    let t = now();
    for days in [0, 1, 3, 10, 45, 400] {
        let then = t - Duration::days(days);
        assert_eq!(
            f.format_elapsed_localized(then, "tlh"),
            f.format_elapsed(then)
        );
    }
}

#[test]
fn test_registration_guards() {
    let f = formatter();

    assert!(matches!(
        f.register_locale("   ", locales::english()),
        Err(ElapsedError::InvalidCode)
    ));

    f.register_locale("nl", locales::english().with(Bucket::Days, "%d dagen geleden"))
        .unwrap();
    let second = f.register_locale("nl", locales::english());
    assert!(matches!(second, Err(ElapsedError::AlreadyExists(ref c)) if c == "nl"));
    assert_eq!(
        f.format_elapsed_localized(now() - Duration::days(3), "nl"),
        "3 dagen geleden"
    );

    let incomplete = PhraseTable::new().with(Bucket::Days, "%d dni temu");
    let err = f.register_locale("pl", incomplete).unwrap_err();
    assert!(matches!(err, ElapsedError::Incomplete { ref missing, .. } if missing.len() == 14));
    assert!(!f.registry().contains("pl"));
    assert_eq!(
        f.format_elapsed_localized(now() - Duration::days(3), "pl"),
        "3 days ago"
    );
}

#[test]
fn test_load_bundled_locales() {
    let registry = LocaleRegistry::new();
    assert_eq!(registry.load_from_dir(bundled_locales()).unwrap(), 2);

    assert_eq!(registry.resolve(Bucket::Days, 3, "pt"), "há 3 dias");
    assert_eq!(registry.resolve(Bucket::Weeks, 2, "it"), "2 settimane fa");
}

#[test]
fn test_formatter_from_config() {
    let config = ElapsedConfig::new().locale_dir(bundled_locales());
    let f = ElapsedFormatter::from_config(&config)
        .unwrap()
        .with_clock(FixedClock(now()));

    assert_eq!(f.registry().codes(), vec!["de", "en", "es", "fr", "it", "pt"]);
    assert_eq!(
        f.format_elapsed_localized(now() - Duration::minutes(1), "pt"),
        "há 1 minuto"
    );
}

#[test]
fn test_registries_are_isolated() {
    let a = ElapsedFormatter::new();
    let b = ElapsedFormatter::new();
    a.register_locale("sv", locales::english()).unwrap();
    assert!(a.registry().contains("sv"));
    assert!(!b.registry().contains("sv"));
}

#[test]
fn test_classify_matches_formatter() {
    let t = now();
    let then = t - Duration::days(45);
    let c = classify(t, then);
    assert_eq!(c, Classification { bucket: Bucket::Months, magnitude: 2 });
    assert_eq!(format_between(&LocaleRegistry::new(), t, then, "en"), "2 months ago");
}

#[test]
fn test_error_display() {
    let err = ElapsedError::Incomplete {
        code: "pl".to_string(),
        missing: vec![Bucket::JustNow],
    };
    assert!(err.to_string().contains("just_now"));
}
