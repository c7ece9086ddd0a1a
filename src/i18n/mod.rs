//! Internationalization (i18n) module for multi-language support.
//!
//! This module owns everything locale-related: the registry of supported
//! locales, the validated `Locale` type, the startup locale-resolution
//! pipeline, the static translation tables, and the localization engine that
//! serves translated strings to the rendering layer.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale type validated against the registry
//! - `resolver`: Async startup detection of the active locale, with cache write-through
//! - `strings`: Static per-locale translation tables
//! - `engine`: Process-scoped localizer with atomic table swap on locale change
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_session::i18n::{resolver, Locale, Localizer};
//!
//! // Resolve the active locale before first render (never fails)
//! let locale = resolver::detect(&store).await;
//!
//! // Initialize the process-wide localizer
//! Localizer::init(locale);
//!
//! // Translate anywhere, synchronously
//! let greeting = Localizer::global().translate("home.greeting");
//! ```

mod engine;
mod locale;
mod registry;
pub mod resolver;
mod strings;

pub use engine::Localizer;
pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::table_for;
