//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route names are unique and patterns compile
//! - Check routes reference known views
//! - Validate listener address, timeouts and history base
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::http::ROUTES_ENDPOINT;
use crate::routing::{PathPattern, RouteError, Segment};
use crate::views::View;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routes configured")]
    NoRoutes,

    #[error("duplicate route name '{0}'")]
    DuplicateRouteName(String),

    #[error("route '{name}' has an invalid path: {reason}")]
    InvalidRoutePath { name: String, reason: String },

    #[error("route '{name}' references unknown view '{view}'")]
    UnknownView { name: String, view: String },

    #[error("route '{name}' uses path '{path}', which is reserved")]
    ReservedPath { name: String, path: String },

    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("history base '{0}' must start with '/'")]
    InvalidHistoryBase(String),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut names = HashSet::new();
    for route in &config.routes {
        if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRouteName(route.name.clone()));
        }

        match PathPattern::parse(&route.path) {
            Ok(pattern) => {
                if config.history.base.trim_end_matches('/').is_empty()
                    && is_routes_endpoint(&pattern, config.router.sensitive)
                {
                    errors.push(ValidationError::ReservedPath {
                        name: route.name.clone(),
                        path: route.path.clone(),
                    });
                }
            }
            Err(e) => {
                let reason = match e {
                    RouteError::InvalidPattern { reason, .. } => reason,
                    other => other.to_string(),
                };
                errors.push(ValidationError::InvalidRoutePath {
                    name: route.name.clone(),
                    reason,
                });
            }
        }

        if route.view.parse::<View>().is_err() {
            errors.push(ValidationError::UnknownView {
                name: route.name.clone(),
                view: route.view.clone(),
            });
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let base = &config.history.base;
    if !base.is_empty() && !base.starts_with('/') {
        errors.push(ValidationError::InvalidHistoryBase(base.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The route listing endpoint is served ahead of the resolver.
fn is_routes_endpoint(pattern: &PathPattern, sensitive: bool) -> bool {
    let endpoint = ROUTES_ENDPOINT.trim_start_matches('/');
    match pattern.segments() {
        [Segment::Literal(literal)] if sensitive => literal == endpoint,
        [Segment::Literal(literal)] => literal.eq_ignore_ascii_case(endpoint),
        _ => false,
    }
}
