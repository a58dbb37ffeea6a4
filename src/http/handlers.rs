//! Route handlers.

use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::http::extract::JsonBody;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::users::{CreateUser, UpdateUser, User, UserId};

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

pub async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Users API - Rust + Axum",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

/// Liveness probe; the timestamp is RFC 3339 UTC with milliseconds.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list())
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get(parse_id(&id)?)?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.create(payload)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateUser>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.update(parse_id(&id)?, patch)?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.users.delete(parse_id(&id)?)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reports the path as the client sent it, before trailing-slash trimming.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NoRoute {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Reads the leading decimal digits of a path id, so `1abc` and `1.5` both
/// address user 1. No digits, a minus sign or overflow can never match.
fn parse_id(raw: &str) -> Result<UserId, ApiError> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().map_err(|_| ApiError::NotFound)
}
