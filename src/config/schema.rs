//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::RouterOptions;
use crate::views::default_routes;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// History-mode settings.
    pub history: HistoryConfig,

    /// Matching options shared by all routes.
    pub router: RouterOptions,

    /// Route definitions, in precedence order.
    pub routes: Vec<RouteConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            history: HistoryConfig::default(),
            router: RouterOptions::default(),
            routes: default_routes(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// History-mode configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Base path the application is served under (e.g., "/app").
    /// Empty means the site root.
    pub base: String,
}

/// Route configuration binding a path pattern to a view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Unique route identifier.
    pub name: String,

    /// Path pattern; `:name` segments are parameters.
    pub path: String,

    /// View component name (e.g., "OperadoraView").
    pub view: String,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(config.history.base, "");
        assert_eq!(config.router, RouterOptions::default());
        assert_eq!(config.routes, default_routes());
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_routes_replace_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [router]
            strict = true

            [[routes]]
            name = "operadora"
            path = "/op/:cnpj"
            view = "OperadoraView"
            "#,
        )
        .unwrap();

        assert!(config.router.strict);
        assert!(config.router.sensitive);
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].path, "/op/:cnpj");
    }
}
