//! Route table for the ANS operadoras web interface.
//!
//! Maps history-mode URL paths to the `HomeView` and `OperadoraView`
//! components, binding the `cnpj` parameter of operadora detail pages.

pub mod config;
pub mod history;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::AppConfig;
pub use history::Navigator;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Resolved, RouteError, RouteTable};
pub use views::{app_routes, Page, View};
