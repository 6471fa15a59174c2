//! Built-in phrase tables
//!
//! English is the reference locale: it defines the full set of buckets
//! every other locale must provide, and is used when a requested locale
//! is not registered.

use crate::{Bucket, PhraseTable};

/// Code of the reference locale.
pub const REFERENCE_LOCALE: &str = "en";

/// English, the reference table.
pub fn english() -> PhraseTable {
    PhraseTable::from_iter([
        (Bucket::NotYet, "not yet"),
        (Bucket::JustNow, "just now"),
        (Bucket::Minute, "1 minute ago"),
        (Bucket::Minutes, "%d minutes ago"),
        (Bucket::Hour, "1 hour ago"),
        (Bucket::Hours, "%d hours ago"),
        (Bucket::Yesterday, "Yesterday"),
        (Bucket::Day, "1 day ago"),
        (Bucket::Days, "%d days ago"),
        (Bucket::Week, "1 week ago"),
        (Bucket::Weeks, "%d weeks ago"),
        (Bucket::Month, "1 month ago"),
        (Bucket::Months, "%d months ago"),
        (Bucket::Year, "1 year ago"),
        (Bucket::Years, "%d years ago"),
    ])
}

pub fn french() -> PhraseTable {
    PhraseTable::from_iter([
        (Bucket::NotYet, "pas encore"),
        (Bucket::JustNow, "à l'instant"),
        (Bucket::Minute, "il y a 1 minute"),
        (Bucket::Minutes, "il y a %d minutes"),
        (Bucket::Hour, "il y a 1 heure"),
        (Bucket::Hours, "il y a %d heures"),
        (Bucket::Yesterday, "Hier"),
        (Bucket::Day, "il y a 1 jour"),
        (Bucket::Days, "il y a %d jours"),
        (Bucket::Week, "il y a 1 semaine"),
        (Bucket::Weeks, "il y a %d semaines"),
        (Bucket::Month, "il y a 1 mois"),
        (Bucket::Months, "il y a %d mois"),
        (Bucket::Year, "il y a 1 an"),
        (Bucket::Years, "il y a %d ans"),
    ])
}

pub fn spanish() -> PhraseTable {
    PhraseTable::from_iter([
        (Bucket::NotYet, "todavía no"),
        (Bucket::JustNow, "justo ahora"),
        (Bucket::Minute, "hace 1 minuto"),
        (Bucket::Minutes, "hace %d minutos"),
        (Bucket::Hour, "hace 1 hora"),
        (Bucket::Hours, "hace %d horas"),
        (Bucket::Yesterday, "Ayer"),
        (Bucket::Day, "hace 1 día"),
        (Bucket::Days, "hace %d días"),
        (Bucket::Week, "hace 1 semana"),
        (Bucket::Weeks, "hace %d semanas"),
        (Bucket::Month, "hace 1 mes"),
        (Bucket::Months, "hace %d meses"),
        (Bucket::Year, "hace 1 año"),
        (Bucket::Years, "hace %d años"),
    ])
}

// German inflects after "vor" (dative), so singular and plural differ
// beyond a trailing "s".
pub fn german() -> PhraseTable {
    PhraseTable::from_iter([
        (Bucket::NotYet, "noch nicht"),
        (Bucket::JustNow, "gerade eben"),
        (Bucket::Minute, "vor 1 Minute"),
        (Bucket::Minutes, "vor %d Minuten"),
        (Bucket::Hour, "vor 1 Stunde"),
        (Bucket::Hours, "vor %d Stunden"),
        (Bucket::Yesterday, "Gestern"),
        (Bucket::Day, "vor 1 Tag"),
        (Bucket::Days, "vor %d Tagen"),
        (Bucket::Week, "vor 1 Woche"),
        (Bucket::Weeks, "vor %d Wochen"),
        (Bucket::Month, "vor 1 Monat"),
        (Bucket::Months, "vor %d Monaten"),
        (Bucket::Year, "vor 1 Jahr"),
        (Bucket::Years, "vor %d Jahren"),
    ])
}

/// Built-in locales other than the reference one.
pub fn builtins() -> Vec<(&'static str, PhraseTable)> {
    vec![("fr", french()), ("es", spanish()), ("de", german())]
}
