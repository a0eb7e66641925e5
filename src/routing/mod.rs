//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target or request path
//!     → router.rs (strip query/fragment, scan routes in order)
//!     → matcher.rs (compare segments, bind :params)
//!     → Return: Resolved { name, view, params } or NoMatch
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Compile patterns
//!     → Check name uniqueness
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input always matches same route
//! - First match wins (table order)

pub mod error;
pub mod matcher;
pub mod params;
pub mod router;

pub use error::RouteError;
pub use matcher::{PathPattern, Segment};
pub use params::Params;
pub use router::{Resolved, Route, RouteTable, RouterOptions};
