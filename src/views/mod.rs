//! View collaborators and the application route table.
//!
//! # Data Flow
//! ```text
//! default_routes() (RouteConfig[])
//!     → RouteTable::from_config (compile, check names)
//!     → app_routes() (&'static, built once on first use)
//!
//! Resolved { name, view, params }
//!     → Page::from_resolved
//!     → Page::Home | Page::Operadora { cnpj }
//! ```
//!
//! # Design Decisions
//! - Views are external collaborators; this crate only names them
//! - The application table is process-wide and immutable after first use
//! - Configured tables are built from the same defaults when `[[routes]]` is absent

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::schema::RouteConfig;
use crate::routing::{Resolved, RouteError, RouteTable, RouterOptions};

/// Name of the `operadora` route parameter holding the CNPJ.
pub const CNPJ_PARAM: &str = "cnpj";

/// A unit of UI presentation activated when its route matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    #[serde(rename = "HomeView")]
    Home,
    #[serde(rename = "OperadoraView")]
    Operadora,
}

impl View {
    pub const ALL: [View; 2] = [View::Home, View::Operadora];

    /// Component name of the view.
    pub fn component(&self) -> &'static str {
        match self {
            View::Home => "HomeView",
            View::Operadora => "OperadoraView",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component())
    }
}

impl FromStr for View {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.component() == s)
            .ok_or_else(|| RouteError::UnknownView(s.to_string()))
    }
}

/// A view activated with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Operadora { cnpj: String },
}

impl Page {
    /// Hand the resolved parameters to the view they select.
    pub fn from_resolved(resolved: &Resolved) -> Result<Self, RouteError> {
        match resolved.view {
            View::Home => Ok(Page::Home),
            View::Operadora => {
                let cnpj = resolved.params.get(CNPJ_PARAM).ok_or_else(|| {
                    RouteError::MissingParam {
                        route: resolved.name.clone(),
                        param: CNPJ_PARAM.to_string(),
                    }
                })?;
                Ok(Page::Operadora {
                    cnpj: cnpj.to_string(),
                })
            }
        }
    }

    pub fn view(&self) -> View {
        match self {
            Page::Home => View::Home,
            Page::Operadora { .. } => View::Operadora,
        }
    }
}

/// The application's routes, in precedence order.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig {
            name: "home".to_string(),
            path: "/".to_string(),
            view: View::Home.component().to_string(),
        },
        RouteConfig {
            name: "operadora".to_string(),
            path: format!("/operadoras/:{}", CNPJ_PARAM),
            view: View::Operadora.component().to_string(),
        },
    ]
}

static APP_ROUTES: OnceLock<RouteTable> = OnceLock::new();

/// The process-wide application route table.
pub fn app_routes() -> &'static RouteTable {
    APP_ROUTES.get_or_init(|| {
        RouteTable::from_config(&default_routes(), RouterOptions::default())
            .expect("built-in routes are well-formed")
    })
}
