//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! GET /any/path
//!     → request.rs (assign x-request-id)
//!     → server.rs (middleware, state)
//!     → handlers.rs (strip base, resolve)
//!     → 200 Resolved JSON | 404 no-match JSON
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer, ROUTES_ENDPOINT};
