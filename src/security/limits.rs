//! Request body limits.
//!
//! The cap is enforced while buffering the body. Exceeding it surfaces as a
//! body read failure in the JSON extractor, which reports a server error.

use axum::extract::DefaultBodyLimit;

use crate::config::SecurityConfig;

pub fn body_limit(config: &SecurityConfig) -> DefaultBodyLimit {
    DefaultBodyLimit::max(config.max_body_size)
}
