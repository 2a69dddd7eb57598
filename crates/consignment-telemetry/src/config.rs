//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to log lines
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error or a full directive)
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "consignment-service".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CONSIGNMENT_SERVICE_NAME`: Service name (default: consignment-service)
    /// - `CONSIGNMENT_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `CONSIGNMENT_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `CONSIGNMENT_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("CONSIGNMENT_SERVICE_NAME")
                .unwrap_or_else(|_| "consignment-service".to_string()),

            log_level: env::var("CONSIGNMENT_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("CONSIGNMENT_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v, true))
                .unwrap_or(true),

            json_logs: env::var("CONSIGNMENT_JSON_LOGS")
                .map(|v| parse_flag(&v, false))
                .unwrap_or(is_container),
        }
    }
}

/// Interpret a boolean-ish environment value, falling back to `default`
/// for anything unrecognised.
pub(crate) fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
