//! Request path normalization applied ahead of routing.
//!
//! Route matching is lenient about the shape of the path:
//! - trailing slashes are trimmed (`/api/users/` routes as `/api/users`)
//! - static route segments match case-insensitively (`/API/Users`)
//!
//! Handlers that echo the path back read `OriginalUri`, so clients see the
//! path they sent.

use axum::{
    extract::Request,
    http::Uri,
    middleware::Next,
    response::Response,
};
use tower_http::normalize_path::NormalizePathLayer;

/// Segments that appear literally in route templates.
const STATIC_SEGMENTS: [&str; 3] = ["api", "users", "health"];

pub fn trim_trailing_slash_layer() -> NormalizePathLayer {
    NormalizePathLayer::trim_trailing_slash()
}

/// Middleware folding static route segments to their routed spelling.
pub async fn fold_route_case(mut request: Request, next: Next) -> Response {
    if let Some(uri) = fold_uri(request.uri()) {
        *request.uri_mut() = uri;
    }
    next.run(request).await
}

fn fold_uri(uri: &Uri) -> Option<Uri> {
    let path = fold_segments(uri.path())?;
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}

/// Returns the folded path, or `None` when nothing needed folding.
fn fold_segments(path: &str) -> Option<String> {
    let mut changed = false;
    let folded: Vec<&str> = path
        .split('/')
        .map(|segment| {
            match STATIC_SEGMENTS
                .iter()
                .find(|known| known.eq_ignore_ascii_case(segment))
            {
                Some(known) if *known != segment => {
                    changed = true;
                    *known
                }
                _ => segment,
            }
        })
        .collect();

    changed.then(|| folded.join("/"))
}
