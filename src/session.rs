//! Session event reporter: best-effort lifecycle analytics.
//!
//! Reports SessionStart / SessionEnd to the collector when the host app is
//! foregrounded / backgrounded. Telemetry must never crash the app or block
//! its startup, so every failure mode — connect error, timeout, non-2xx
//! status, malformed body, collector rejection — collapses to a structured
//! `SessionEventResult` plus one tagged log line. Nothing is retried and
//! nothing is escalated; duplicate events are the collector's problem.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;

/// A lifecycle event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// App launched or foregrounded.
    Start,
    /// App closed or backgrounded.
    End,
}

impl SessionEvent {
    /// Log tag distinguishing the two event kinds in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            SessionEvent::Start => "session_start",
            SessionEvent::End => "session_end",
        }
    }
}

/// Outcome of a report call. Never delivered as an error: `success: false`
/// covers every failure mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEventResult {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
struct SessionEventRequest {
    device_id: String,
    client_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct SessionEventResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the analytics collector.
pub struct SessionReporter {
    client: reqwest::Client,
    base_url: String,
    start_path: String,
    end_path: String,
    device_id: String,
}

impl SessionReporter {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.collector_base_url.trim_end_matches('/').to_string(),
            start_path: config.session_start_path.clone(),
            end_path: config.session_end_path.clone(),
            device_id: config.device_id.clone(),
        }
    }

    /// Report a session start. Always resolves to a result, never an error.
    pub async fn report_start(&self) -> SessionEventResult {
        self.report(SessionEvent::Start).await
    }

    /// Report a session end. Always resolves to a result, never an error.
    pub async fn report_end(&self) -> SessionEventResult {
        self.report(SessionEvent::End).await
    }

    async fn report(&self, event: SessionEvent) -> SessionEventResult {
        match self.try_report(event).await {
            Ok(response) => {
                if response.success {
                    info!("[{}] event accepted by collector", event.tag());
                } else {
                    warn!(
                        "[{}] collector rejected event: {}",
                        event.tag(),
                        response.message.as_deref().unwrap_or("no detail")
                    );
                }
                SessionEventResult {
                    success: response.success,
                    message: response.message,
                }
            }
            Err(e) => {
                warn!("[{}] report failed: {:#}", event.tag(), e);
                // Keep the full error chain rather than a generic message;
                // the collector-side text is the only debugging handle.
                let mut message = format!("{:#}", e);
                if message.is_empty() {
                    message = "unknown transport error".to_string();
                }
                SessionEventResult {
                    success: false,
                    message: Some(message),
                }
            }
        }
    }

    async fn try_report(&self, event: SessionEvent) -> Result<SessionEventResponse> {
        let path = match event {
            SessionEvent::Start => &self.start_path,
            SessionEvent::End => &self.end_path,
        };
        let url = format!("{}{}", self.base_url, path);

        let request = SessionEventRequest {
            device_id: self.device_id.clone(),
            client_time: Utc::now(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to collector")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Collector error ({}): {}", status, body);
        }

        response
            .json::<SessionEventResponse>()
            .await
            .context("Failed to parse collector response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Event Kind Tests ====================

    #[test]
    fn test_event_tags_are_distinct() {
        assert_eq!(SessionEvent::Start.tag(), "session_start");
        assert_eq!(SessionEvent::End.tag(), "session_end");
        assert_ne!(SessionEvent::Start.tag(), SessionEvent::End.tag());
    }

    // ==================== Response Deserialization Tests ====================

    #[test]
    fn test_response_deserialization_full() {
        let json = r#"{"success": true, "message": "recorded"}"#;
        let response: SessionEventResponse = serde_json::from_str(json).expect("deserialize");
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("recorded"));
    }

    #[test]
    fn test_response_deserialization_missing_fields_default_to_falsy() {
        let json = r#"{}"#;
        let response: SessionEventResponse = serde_json::from_str(json).expect("deserialize");
        assert!(!response.success);
        assert!(response.message.is_none());
    }

    #[test]
    fn test_request_serialization_has_identity_and_time() {
        let request = SessionEventRequest {
            device_id: "device-123".to_string(),
            client_time: Utc::now(),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["device_id"], "device-123");
        assert!(json["client_time"].is_string());
    }

    // ==================== Reporter Construction Tests ====================

    #[test]
    fn test_new_trims_trailing_slash_from_base_url() {
        let config = Config {
            collector_base_url: "http://collector.example/".to_string(),
            session_start_path: "/v1/sessions/start".to_string(),
            session_end_path: "/v1/sessions/end".to_string(),
            device_id: "d".to_string(),
            preferences_file: "preferences.json".to_string(),
        };
        let reporter = SessionReporter::new(&config);
        assert_eq!(reporter.base_url, "http://collector.example");
    }
}
