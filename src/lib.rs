// elapsed - human-readable, localized "time ago" phrases
//
// Facade over the workspace crates: the classification engine and locale
// registry live in `elapsed-i18n`, logging in `elapsed-log`.

// Re-export engine functionality
pub use elapsed_i18n::*;

pub use chrono;
pub use elapsed_log as log;

// Prelude for common imports
pub mod prelude {
    pub use elapsed_i18n::prelude::*;

    pub use chrono::{DateTime, Duration, Utc};
}
