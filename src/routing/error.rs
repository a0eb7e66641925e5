//! Routing errors.

use thiserror::Error;

/// Errors produced while building or consulting a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No configured route matches the path. The caller decides the fallback.
    #[error("no route matches path '{path}'")]
    NoMatch { path: String },

    /// Two routes share the same name.
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    /// The path pattern could not be compiled.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A route references a view component that does not exist.
    #[error("unknown view '{0}'")]
    UnknownView(String),

    /// Reverse routing asked for a name that is not in the table.
    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    /// Reverse routing was not given a value for a pattern parameter.
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },
}

impl RouteError {
    pub(crate) fn no_match(path: impl Into<String>) -> Self {
        RouteError::NoMatch { path: path.into() }
    }

    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
