//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → RouteTable::from_config at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::AppConfig;
pub use schema::HistoryConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::TimeoutConfig;
pub use validation::ValidationError;
