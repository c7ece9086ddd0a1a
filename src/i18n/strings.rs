//! Static per-locale translation tables.
//!
//! One table per supported locale, fully resident in memory, never mutated at
//! runtime. The Vietnamese table is the superset: it is the default locale and
//! every key must exist there. Other tables may lag behind it; lookups for
//! keys they are missing fall back to the default table in the engine.

use crate::i18n::Locale;

/// A translation table: key/value pairs for one locale.
pub type TranslationTable = &'static [(&'static str, &'static str)];

/// Vietnamese strings (default locale, superset of all keys).
pub static VI_STRINGS: TranslationTable = &[
    ("hello", "Xin chào"),
    ("home.greeting", "Chào mừng bạn quay lại!"),
    ("home.title", "Trang chủ"),
    ("nav.home", "Trang chủ"),
    ("nav.history", "Lịch sử"),
    ("nav.settings", "Cài đặt"),
    ("settings.language", "Ngôn ngữ"),
    ("settings.language.vi", "Tiếng Việt"),
    ("settings.language.en", "Tiếng Anh"),
    ("settings.notifications", "Thông báo"),
    ("common.ok", "Đồng ý"),
    ("common.cancel", "Hủy"),
    ("common.retry", "Thử lại"),
    ("error.offline", "Không có kết nối mạng. Vui lòng thử lại."),
    ("session.expired", "Phiên đăng nhập đã hết hạn."),
    // Market-specific campaign copy, intentionally not translated
    ("promo.banner", "Ưu đãi tháng này dành riêng cho bạn"),
];

/// English strings.
///
/// Missing keys (`promo.banner`) resolve through the default table.
pub static EN_STRINGS: TranslationTable = &[
    ("hello", "Hello"),
    ("home.greeting", "Welcome back!"),
    ("home.title", "Home"),
    ("nav.home", "Home"),
    ("nav.history", "History"),
    ("nav.settings", "Settings"),
    ("settings.language", "Language"),
    ("settings.language.vi", "Vietnamese"),
    ("settings.language.en", "English"),
    ("settings.notifications", "Notifications"),
    ("common.ok", "OK"),
    ("common.cancel", "Cancel"),
    ("common.retry", "Retry"),
    ("error.offline", "No network connection. Please try again."),
    ("session.expired", "Your session has expired."),
];

/// Get the translation table for a locale.
pub fn table_for(locale: Locale) -> TranslationTable {
    match locale.code() {
        "vi" => VI_STRINGS,
        "en" => EN_STRINGS,
        // Registered locales without a shipped table read as empty; every
        // lookup then falls through to the default table.
        _ => &[],
    }
}
