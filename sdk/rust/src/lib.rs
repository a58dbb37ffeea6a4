//! Client SDK for the users API.

pub mod client;

pub use client::{ClientError, HealthStatus, NewUser, ServiceInfo, User, UserPatch, UsersClient};
