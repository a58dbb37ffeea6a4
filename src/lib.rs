//! In-memory users CRUD service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (middleware stack)
//!                         │
//!                         ▼
//!                     http::handlers ──▶ users::service ──▶ users::store
//!                         │                                  (Vec<User>)
//!                         ▼
//!     ◀────────────── http::response (status + JSON body)
//!
//!     Cross-cutting: config, observability, security, lifecycle
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod users;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use users::{User, UserService, UserStore};
