//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router, navigator and HTTP handlers produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution counters)
//!
//! Consumers:
//!     → stderr log stream
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
