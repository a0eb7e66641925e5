//! Route lookup and reverse routing.
//!
//! # Responsibilities
//! - Store compiled routes in precedence order
//! - Look up the route matching a path and bind its parameters
//! - Build paths for named routes
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - O(n) scan over routes (the table is small)
//! - First match wins
//! - Explicit NoMatch rather than silent default

use std::collections::HashSet;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::config::schema::RouteConfig;
use crate::routing::error::RouteError;
use crate::routing::matcher::{PathPattern, Segment};
use crate::routing::params::Params;
use crate::views::View;

/// Characters escaped when a parameter value is written into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Matching options shared by every route in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterOptions {
    /// When false, one trailing `/` on a non-root path is ignored.
    pub strict: bool,

    /// When true, literal segments must match with the same case.
    pub sensitive: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            strict: false,
            sensitive: true,
        }
    }
}

/// A named route binding a path pattern to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    pattern: PathPattern,
    view: View,
}

impl Route {
    pub fn new(path: &str, name: impl Into<String>, view: View) -> Result<Self, RouteError> {
        Ok(Self {
            name: name.into(),
            pattern: PathPattern::parse(path)?,
            view,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Build the path for this route from parameter values.
    pub fn href(&self, params: &Params) -> Result<String, RouteError> {
        let mut out = String::new();
        for segment in self.pattern.segments() {
            out.push('/');
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            route: self.name.clone(),
                            param: name.clone(),
                        })?;
                    out.extend(utf8_percent_encode(value, SEGMENT));
                }
            }
        }

        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

/// Outcome of a successful resolution, handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// Name of the matched route.
    pub name: String,

    /// View to activate.
    pub view: View,

    /// Path that was matched, without query or fragment.
    pub path: String,

    /// Parameters bound from the path.
    pub params: Params,
}

/// Ordered, immutable set of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    options: RouterOptions,
}

impl RouteTable {
    /// Build a table, rejecting duplicate route names.
    pub fn new(
        routes: impl IntoIterator<Item = Route>,
        options: RouterOptions,
    ) -> Result<Self, RouteError> {
        let routes: Vec<Route> = routes.into_iter().collect();

        let mut names = HashSet::new();
        for route in &routes {
            if !names.insert(route.name.as_str()) {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }
        }

        Ok(Self { routes, options })
    }

    /// Build a table from route configuration entries.
    pub fn from_config(configs: &[RouteConfig], options: RouterOptions) -> Result<Self, RouteError> {
        let routes = configs
            .iter()
            .map(|c| Route::new(&c.path, c.name.as_str(), c.view.parse()?))
            .collect::<Result<Vec<_>, _>>()?;

        let table = Self::new(routes, options)?;
        tracing::debug!(
            routes = table.len(),
            strict = options.strict,
            sensitive = options.sensitive,
            "Route table compiled"
        );
        Ok(table)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn options(&self) -> RouterOptions {
        self.options
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by name.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Find the first route matching `path` (query and fragment ignored).
    pub fn find(&self, path: &str) -> Option<(&Route, Params)> {
        let path = path_only(path);
        self.routes
            .iter()
            .find_map(|route| route.pattern.matches(path, &self.options).map(|p| (route, p)))
    }

    /// Resolve a path to the route and parameters that should be rendered.
    pub fn resolve(&self, path: &str) -> Result<Resolved, RouteError> {
        match self.find(path) {
            Some((route, params)) => Ok(Resolved {
                name: route.name.clone(),
                view: route.view,
                path: path_only(path).to_string(),
                params,
            }),
            None => Err(RouteError::no_match(path)),
        }
    }

    /// Build the path for a named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        self.route(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?
            .href(params)
    }
}

/// Drop the fragment and query string from a path.
pub fn path_only(path: &str) -> &str {
    let path = path.split_once('#').map_or(path, |(p, _)| p);
    path.split_once('?').map_or(path, |(p, _)| p)
}
