//! Locale type: validated language/region representation.
//!
//! A `Locale` can only name a locale that exists in the registry and is
//! enabled, so code holding one never has to re-validate it.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// A validated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "vi", "en")
    code: &'static str,
}

impl Locale {
    /// Vietnamese, the default locale.
    pub const VIETNAMESE: Locale = Locale { code: "vi" };

    /// English.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a language code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the fallback locale.
    ///
    /// This is the locale used when no preference is stored, when the stored
    /// preference is unreadable, and as the second step of every translation
    /// lookup.
    pub fn fallback() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This should never
    /// happen if the Locale was constructed properly (via `from_code` or the
    /// constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the English name of the locale.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_vietnamese_constant() {
        let vietnamese = Locale::VIETNAMESE;
        assert_eq!(vietnamese.code(), "vi");
        assert_eq!(vietnamese.name(), "Vietnamese");
        assert!(vietnamese.is_default());
    }

    #[test]
    fn test_english_constant() {
        let english = Locale::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(!english.is_default());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_vietnamese() {
        let locale = Locale::from_code("vi").expect("Should succeed");
        assert_eq!(locale.code(), "vi");
        assert_eq!(locale.name(), "Vietnamese");
    }

    #[test]
    fn test_from_code_english() {
        let locale = Locale::from_code("en").expect("Should succeed");
        assert_eq!(locale.code(), "en");
        assert_eq!(locale.name(), "English");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        let result = Locale::from_code("");
        assert!(result.is_err());
    }

    // ==================== fallback Tests ====================

    #[test]
    fn test_fallback_returns_vietnamese() {
        let fallback = Locale::fallback();
        assert_eq!(fallback.code(), "vi");
        assert!(fallback.is_default());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_locale_equality() {
        let locale1 = Locale::ENGLISH;
        let locale2 = Locale::from_code("en").unwrap();
        assert_eq!(locale1, locale2);
    }

    #[test]
    fn test_locale_inequality() {
        assert_ne!(Locale::VIETNAMESE, Locale::ENGLISH);
    }

    #[test]
    fn test_locale_copy() {
        let locale1 = Locale::VIETNAMESE;
        let locale2 = locale1; // Copy
        assert_eq!(locale1, locale2); // Both still valid
    }

    #[test]
    fn test_locale_debug() {
        let locale = Locale::ENGLISH;
        let debug = format!("{:?}", locale);
        assert!(debug.contains("en"));
    }

    // ==================== Config Access Tests ====================

    #[test]
    fn test_config_access() {
        let locale = Locale::VIETNAMESE;
        let config = locale.config();
        assert_eq!(config.code, "vi");
        assert_eq!(config.name, "Vietnamese");
        assert_eq!(config.native_name, "Tiếng Việt");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Locale::VIETNAMESE.native_name(), "Tiếng Việt");
        assert_eq!(Locale::ENGLISH.native_name(), "English");
    }
}
