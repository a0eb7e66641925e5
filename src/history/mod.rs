//! History-mode navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (link click, push/replace call, back/forward)
//!     → location.rs (split path, query, fragment)
//!     → base.rs (strip the mount base)
//!     → RouteTable::resolve
//!     → navigator.rs (record entry, move cursor)
//!     → Navigation { from, to, kind } for the view layer
//! ```
//!
//! # Design Decisions
//! - Single owner, synchronous; no shared mutable state
//! - NoMatch is surfaced to the caller, never replaced by a fallback view

pub mod base;
pub mod location;
pub mod navigator;

pub use base::HistoryBase;
pub use location::Location;
pub use navigator::{HistoryEntry, Navigation, NavigationError, NavigationKind, Navigator};
