//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `SESSION_SIGNING_SECRET` - HMAC key for session token validation
//!
//! ## Optional Variables
//!
//! - `ANALYTICS_URL` - Analytics endpoint (delivery disabled if unset)
//! - `COUNTER_STORE_PATH` - Click counter file (in-memory store if unset)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `EVENT_QUEUE_CAPACITY` - Telemetry event buffer size (default: 10000, min: 100)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Analytics endpoint receiving telemetry events.
    /// Delivery is disabled when unset.
    pub analytics_url: Option<String>,
    /// File persisting click counters across restarts.
    /// Counters live in memory only when unset.
    pub counter_store_path: Option<PathBuf>,
    /// Capacity of the telemetry delivery queue; events beyond it are dropped.
    pub event_queue_capacity: usize,
    /// HMAC signing secret used to validate session tokens.
    /// Loaded from `SESSION_SIGNING_SECRET`. Must be non-empty.
    pub session_signing_secret: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SESSION_SIGNING_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let analytics_url = env::var("ANALYTICS_URL").ok().filter(|v| !v.is_empty());

        let counter_store_path = env::var("COUNTER_STORE_PATH")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let event_queue_capacity = env::var("EVENT_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let session_signing_secret =
            env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            analytics_url,
            counter_store_path,
            event_queue_capacity,
            session_signing_secret,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `event_queue_capacity` is outside 100..=1000000
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `analytics_url` is not an HTTP(S) URL
    /// - `session_signing_secret` is empty
    pub fn validate(&self) -> Result<()> {
        if self.event_queue_capacity < 100 {
            anyhow::bail!(
                "EVENT_QUEUE_CAPACITY must be at least 100, got {}",
                self.event_queue_capacity
            );
        }

        if self.event_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "EVENT_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.event_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref analytics_url) = self.analytics_url
            && !analytics_url.starts_with("http://")
            && !analytics_url.starts_with("https://")
        {
            anyhow::bail!(
                "ANALYTICS_URL must start with 'http://' or 'https://', got '{}'",
                analytics_url
            );
        }

        if self.session_signing_secret.is_empty() {
            anyhow::bail!("SESSION_SIGNING_SECRET must not be empty");
        }

        Ok(())
    }

    /// Returns whether analytics delivery is enabled.
    pub fn is_analytics_enabled(&self) -> bool {
        self.analytics_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref analytics_url) = self.analytics_url {
            tracing::info!("  Analytics: {} (enabled)", analytics_url);
        } else {
            tracing::info!("  Analytics: disabled");
        }

        match self.counter_store_path {
            Some(ref path) => tracing::info!("  Counter store: {}", path.display()),
            None => tracing::info!("  Counter store: in-memory"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Event queue capacity: {}", self.event_queue_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            analytics_url: None,
            counter_store_path: None,
            event_queue_capacity: 10_000,
            session_signing_secret: "test-secret".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();

        assert!(config.validate().is_ok());

        // Test invalid queue capacity
        config.event_queue_capacity = 50;
        assert!(config.validate().is_err());

        config.event_queue_capacity = 10_000;

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test invalid analytics URL
        config.analytics_url = Some("ftp://analytics.example.com".to_string());
        assert!(config.validate().is_err());

        config.analytics_url = Some("https://analytics.example.com/api/analytics".to_string());
        assert!(config.validate().is_ok());

        // Test empty signing secret
        config.session_signing_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_analytics_enabled_flag() {
        let mut config = base_config();
        assert!(!config.is_analytics_enabled());

        config.analytics_url = Some("https://analytics.example.com".to_string());
        assert!(config.is_analytics_enabled());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_signing_secret() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("SESSION_SIGNING_SECRET");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_optional_values() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SESSION_SIGNING_SECRET", "secret");
            env::set_var("ANALYTICS_URL", "https://analytics.example.com");
            env::set_var("COUNTER_STORE_PATH", "/var/lib/portal/counters.json");
            env::set_var("EVENT_QUEUE_CAPACITY", "500");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(
            config.analytics_url.as_deref(),
            Some("https://analytics.example.com")
        );
        assert_eq!(
            config.counter_store_path,
            Some(PathBuf::from("/var/lib/portal/counters.json"))
        );
        assert_eq!(config.event_queue_capacity, 500);

        // Cleanup
        unsafe {
            env::remove_var("SESSION_SIGNING_SECRET");
            env::remove_var("ANALYTICS_URL");
            env::remove_var("COUNTER_STORE_PATH");
            env::remove_var("EVENT_QUEUE_CAPACITY");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("ANALYTICS_URL");
            env::remove_var("COUNTER_STORE_PATH");
            env::remove_var("EVENT_QUEUE_CAPACITY");
            env::set_var("SESSION_SIGNING_SECRET", "secret");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert!(config.analytics_url.is_none());
        assert!(config.counter_store_path.is_none());
        assert_eq!(config.event_queue_capacity, 10_000);

        // Cleanup
        unsafe {
            env::remove_var("SESSION_SIGNING_SECRET");
        }
    }
}
