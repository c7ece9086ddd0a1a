//! Localization engine: serves translated strings for the active locale.
//!
//! The engine holds an immutable snapshot (locale + lookup map) behind an
//! `RwLock<Arc<..>>`. Readers clone the `Arc` and look up against a frozen
//! table, so a locale switch swaps the whole snapshot in one assignment and
//! no reader ever sees a half-switched table.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use tracing::{debug, info};

use crate::i18n::strings::table_for;
use crate::i18n::Locale;

/// Immutable view of one locale's translations.
struct TableSnapshot {
    locale: Locale,
    table: HashMap<&'static str, &'static str>,
}

impl TableSnapshot {
    fn build(locale: Locale) -> Self {
        Self {
            locale,
            table: table_for(locale).iter().copied().collect(),
        }
    }
}

/// Lookup map for the default locale, shared by every fallback lookup.
fn default_table() -> &'static HashMap<&'static str, &'static str> {
    static DEFAULT: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    DEFAULT.get_or_init(|| table_for(Locale::fallback()).iter().copied().collect())
}

/// Translation lookup for one process.
///
/// Usually accessed through [`Localizer::global`], but owned instances are
/// cheap to construct and are what the tests use.
pub struct Localizer {
    active: RwLock<Arc<TableSnapshot>>,
}

/// Global localizer instance (initialized lazily)
static LOCALIZER: OnceLock<Localizer> = OnceLock::new();

impl Localizer {
    /// Create a localizer for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self {
            active: RwLock::new(Arc::new(TableSnapshot::build(locale))),
        }
    }

    /// Get the process-wide localizer instance.
    ///
    /// If `init` has not run yet this starts at the fallback locale, so
    /// `translate` is usable (and infallible) at any point during startup.
    pub fn global() -> &'static Localizer {
        LOCALIZER.get_or_init(|| Localizer::new(Locale::fallback()))
    }

    /// Point the process-wide localizer at the resolved startup locale.
    ///
    /// Called once after locale detection completes; calling it again is
    /// equivalent to `set_locale` on the global instance.
    pub fn init(locale: Locale) {
        Self::global().set_locale(locale);
        info!("Localizer initialized with locale '{}'", locale.code());
    }

    /// The currently active locale.
    pub fn locale(&self) -> Locale {
        self.snapshot().locale
    }

    /// Translate a key for the active locale.
    ///
    /// Lookup order: active table, then the default-locale table, then the
    /// key itself. Never fails; a missing key renders as itself so the UI
    /// always has something to show.
    pub fn translate(&self, key: &str) -> String {
        let snapshot = self.snapshot();

        if let Some(value) = snapshot.table.get(key) {
            return (*value).to_string();
        }
        if let Some(value) = default_table().get(key) {
            debug!(
                "Missing '{}' translation for key '{}', using default locale",
                snapshot.locale.code(),
                key
            );
            return (*value).to_string();
        }
        debug!("No translation for key '{}', returning key", key);
        key.to_string()
    }

    /// Switch the active locale by swapping in a freshly built snapshot.
    pub fn set_locale(&self, locale: Locale) {
        let snapshot = Arc::new(TableSnapshot::build(locale));
        *self.active.write().expect("localizer lock poisoned") = snapshot;
    }

    fn snapshot(&self) -> Arc<TableSnapshot> {
        Arc::clone(&self.active.read().expect("localizer lock poisoned"))
    }
}
