use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Analytics collector
    pub collector_base_url: String,
    pub session_start_path: String,
    pub session_end_path: String,

    // Device identity attached to session events
    pub device_id: String,

    // Preference store
    pub preferences_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Analytics collector
            collector_base_url: std::env::var("COLLECTOR_BASE_URL")
                .context("COLLECTOR_BASE_URL not set")?,
            session_start_path: std::env::var("SESSION_START_PATH")
                .unwrap_or_else(|_| "/v1/sessions/start".to_string()),
            session_end_path: std::env::var("SESSION_END_PATH")
                .unwrap_or_else(|_| "/v1/sessions/end".to_string()),

            // Device identity
            device_id: std::env::var("DEVICE_ID").unwrap_or_else(|_| "unknown".to_string()),

            // Preference store
            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "preferences.json".to_string()),
        })
    }
}
