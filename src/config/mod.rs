//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → PORT environment override
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so running without a file is valid
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, SecurityConfig, ServiceConfig, StoreConfig, TimeoutConfig,
};
