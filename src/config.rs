// src/config.rs
use crate::session::SessionLimits;
use std::collections::HashMap;
use std::fs;
use std::time::Duration;
use tracing::warn;

pub const SETTINGS_FILE: &str = "vin_pricing.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    /// Base URL of the service exposing `/api/decode-vin` and `/api/pricing-cards`.
    pub backend_url: String,
    pub max_workers: usize,
    /// Unset means the backend call has no client-side deadline.
    pub request_timeout_secs: Option<u64>,
    pub scroll_delay_ms: u64,
    pub session_ttl_secs: u64,
    pub max_sessions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
            backend_url: "http://127.0.0.1:5000".into(),
            max_workers: 8,
            request_timeout_secs: None,
            scroll_delay_ms: 100,
            session_ttl_secs: 60 * 60,
            max_sessions: 10_000,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            ttl: Duration::from_secs(self.session_ttl_secs),
            max_sessions: self.max_sessions,
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "bind_addr" => self.bind_addr = value.to_string(),
            "backend_url" => self.backend_url = value.to_string(),
            "max_workers" => set_number(key, value, &mut self.max_workers),
            "request_timeout_secs" => {
                let mut secs: u64 = 0;
                set_number(key, value, &mut secs);
                self.request_timeout_secs = (secs > 0).then_some(secs);
            }
            "scroll_delay_ms" => set_number(key, value, &mut self.scroll_delay_ms),
            "session_ttl_secs" => set_number(key, value, &mut self.session_ttl_secs),
            "max_sessions" => set_number(key, value, &mut self.max_sessions),
            _ => warn!(key, "unknown setting ignored"),
        }
    }
}

fn set_number<T: std::str::FromStr>(key: &str, value: &str, slot: &mut T) {
    match value.trim().parse() {
        Ok(v) => *slot = v,
        Err(_) => warn!(key, value, "not a number, keeping default"),
    }
}

const KEYS: &[&str] = &[
    "bind_addr",
    "backend_url",
    "max_workers",
    "request_timeout_secs",
    "scroll_delay_ms",
    "session_ttl_secs",
    "max_sessions",
];

/// Defaults, then `vin_pricing.toml` if present, then `APP__*` variables.
pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    let env: HashMap<String, String> = std::env::vars().collect();
    settings_from(file.as_deref(), &env)
}

pub fn settings_from(file: Option<&str>, env: &HashMap<String, String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, toml::Value>>(raw) {
            Ok(table) => {
                for (key, value) in &table {
                    let text = match value {
                        toml::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    settings.set(key, &text);
                }
            }
            Err(e) => warn!(error = %e, file = SETTINGS_FILE, "settings file unreadable, ignored"),
        }
    }

    for key in KEYS {
        let var = format!("APP__{}", key.to_ascii_uppercase());
        if let Some(v) = env.get(&var) {
            settings.set(key, v);
        }
    }

    settings
}
