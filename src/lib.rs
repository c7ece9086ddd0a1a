//! Locale resolution and best-effort session analytics.
//!
//! This crate implements the two startup-critical pieces of the app's client
//! runtime: the asynchronous locale-resolution pipeline (preference store read,
//! priority fallback, cache write-through) and the fail-silent session event
//! reporter that posts lifecycle events to the analytics collector.
//!
//! Both components share one contract: nothing in here is allowed to crash the
//! app, block its startup, or surface an error to the user. Every fallible
//! path collapses to a safe default plus a diagnostic log line.

pub mod config;
pub mod i18n;
pub mod prefs;
pub mod session;
