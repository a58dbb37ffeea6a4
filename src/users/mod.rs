//! User resource subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler (parsed path id + JSON body)
//!     → service.rs (validation, id assignment, partial update)
//!     → store.rs (ordered in-memory collection)
//!     → Result<User, UserError>
//! ```
//!
//! # Design Decisions
//! - The store is owned by the service and constructed once at startup
//! - Every operation runs under a single lock acquisition
//! - Ids are recomputed as max + 1 on every create, never counted

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::UserError;
pub use model::{CreateUser, UpdateUser, User, UserId};
pub use service::UserService;
pub use store::UserStore;
