//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors (preflight answered, origin allowed)
//!     → limits.rs (JSON body size cap)
//!     → handler
//! Outgoing response:
//!     → headers.rs (hardening headers, only when not already set)
//! ```

pub mod headers;
pub mod limits;
