//! Startup locale resolution.
//!
//! `detect` runs once per process, before the first render, and must always
//! produce a locale: a missing preference, a broken store, or an unrecognized
//! stored code all degrade to the fallback locale. `cache` is the
//! write-through half, invoked when the user explicitly changes language.

use tracing::{debug, info, warn};

use crate::i18n::Locale;
use crate::prefs::PreferenceStore;

/// Preference store key holding the user's chosen locale code.
pub const PREF_KEY: &str = "app.locale";

/// Determine the active locale.
///
/// Priority order:
/// 1. the stored preference, if present, non-empty, and a supported locale;
/// 2. the fallback locale otherwise.
///
/// Store failures are logged and treated identically to "no preference";
/// this function has no error path because locale resolution gates the first
/// paint of the UI.
pub async fn detect(store: &PreferenceStore) -> Locale {
    let stored = match store.get(PREF_KEY).await {
        Ok(value) => value,
        Err(e) => {
            warn!("Preference store read failed, using fallback locale: {}", e);
            return Locale::fallback();
        }
    };

    let code = match stored {
        Some(code) if !code.is_empty() => code,
        _ => {
            debug!("No stored locale preference, using fallback");
            return Locale::fallback();
        }
    };

    match Locale::from_code(&code) {
        Ok(locale) => {
            info!("Resolved locale '{}' from stored preference", locale.code());
            locale
        }
        Err(e) => {
            warn!("Stored locale '{}' is not usable ({}), using fallback", code, e);
            Locale::fallback()
        }
    }
}

/// Persist a locale choice for future cold starts.
///
/// A persistence failure is logged and swallowed: the in-memory locale
/// change still stands for the current session, it just won't survive a
/// restart.
pub async fn cache(store: &PreferenceStore, locale: Locale) {
    match store.set(PREF_KEY, locale.code()).await {
        Ok(()) => debug!("Cached locale preference '{}'", locale.code()),
        Err(e) => warn!("Failed to cache locale preference: {}", e),
    }
}
