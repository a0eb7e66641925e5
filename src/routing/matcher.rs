//! Path pattern compilation and matching.
//!
//! # Responsibilities
//! - Compile pattern text (`/operadoras/:cnpj`) into literal and parameter segments
//! - Match a request path segment by segment
//! - Bind parameter segments to their names
//!
//! # Design Decisions
//! - Patterns are compiled once, when the route table is built
//! - A parameter matches exactly one non-empty segment
//! - Path segments are percent-decoded before comparison
//! - No regex: matching is a single pass over the segments

use std::collections::HashSet;

use percent_encoding::percent_decode_str;

use crate::routing::error::RouteError;
use crate::routing::params::Params;
use crate::routing::router::RouterOptions;

/// Marker that turns a segment into a named parameter.
pub const PARAM_MARKER: char = ':';

/// One `/`-separated piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches the path segment verbatim (or ignoring case when not sensitive).
    Literal(String),
    /// Matches any single non-empty segment and binds it under this name.
    Param(String),
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile pattern text.
    ///
    /// The pattern must start with `/`. A single trailing `/` is ignored.
    /// Empty inner segments, unnamed parameters and repeated parameter names
    /// are rejected.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| RouteError::invalid_pattern(pattern, "must start with '/'"))?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = Vec::new();
        let mut seen = HashSet::new();

        if !rest.is_empty() {
            for piece in rest.split('/') {
                if piece.is_empty() {
                    return Err(RouteError::invalid_pattern(pattern, "empty segment"));
                }

                match piece.strip_prefix(PARAM_MARKER) {
                    Some(name) => {
                        if name.is_empty() {
                            return Err(RouteError::invalid_pattern(
                                pattern,
                                "parameter without a name",
                            ));
                        }
                        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                            return Err(RouteError::invalid_pattern(
                                pattern,
                                format!("unsupported characters in parameter '{}'", name),
                            ));
                        }
                        if !seen.insert(name) {
                            return Err(RouteError::invalid_pattern(
                                pattern,
                                format!("parameter '{}' appears more than once", name),
                            ));
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Literal(piece.to_string())),
                }
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern text as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameter segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a path (without query or fragment) against this pattern.
    ///
    /// Returns the bound parameters on success.
    pub fn matches(&self, path: &str, options: &RouterOptions) -> Option<Params> {
        let pieces = split_path(path, options.strict)?;
        if pieces.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (expected, actual) in self.segments.iter().zip(pieces) {
            let decoded = percent_decode_str(actual).decode_utf8().ok()?;
            match expected {
                Segment::Literal(literal) => {
                    if !literal_eq(literal, &decoded, options.sensitive) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if decoded.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), decoded.into_owned());
                }
            }
        }

        Some(params)
    }
}

/// Split an absolute path into raw segments.
///
/// `/` yields no segments. Unless `strict`, one trailing `/` is dropped
/// when something remains before it.
fn split_path(path: &str, strict: bool) -> Option<Vec<&str>> {
    let mut rest = path.strip_prefix('/')?;
    if !strict {
        if let Some(trimmed) = rest.strip_suffix('/') {
            if !trimmed.is_empty() {
                rest = trimmed;
            }
        }
    }

    if rest.is_empty() {
        Some(Vec::new())
    } else {
        Some(rest.split('/').collect())
    }
}

fn literal_eq(expected: &str, actual: &str, sensitive: bool) -> bool {
    if sensitive {
        expected == actual
    } else {
        expected.to_lowercase() == actual.to_lowercase()
    }
}
