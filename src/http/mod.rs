//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and echoed)
//!     → path.rs (trailing slash trimmed, route case folded)
//!     → extract.rs (lenient JSON body parsing)
//!     → handlers.rs (call into users::UserService)
//!     → response.rs (map errors to status + JSON body)
//!     → Send to client
//! ```

pub mod extract;
pub mod handlers;
pub mod path;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
