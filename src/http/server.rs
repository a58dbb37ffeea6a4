//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, panics, timeout, security)
//! - Serve on a listener until shutdown is triggered

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::{handlers, path};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::http::response::handle_panic;
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::security::{headers, limits};
use crate::users::{UserService, UserStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

/// HTTP server for the users API.
pub struct HttpServer {
    router: Router,
    users: Arc<UserService>,
}

impl HttpServer {
    /// Create a server with a fresh store, seeded unless `store.seed` is off.
    pub fn new(config: ServiceConfig) -> Self {
        let store = if config.store.seed {
            UserStore::seeded()
        } else {
            UserStore::new()
        };
        Self::with_service(config, Arc::new(UserService::new(store)))
    }

    /// Create a server around an existing user service.
    pub fn with_service(config: ServiceConfig, users: Arc<UserService>) -> Self {
        let state = AppState {
            users: users.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router, users }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/", get(handlers::info))
            .route("/health", get(handlers::health))
            .route(
                "/api/users",
                get(handlers::list_users).post(handlers::create_user),
            )
            .route(
                "/api/users/{id}",
                get(handlers::get_user)
                    .put(handlers::update_user)
                    .delete(handlers::delete_user),
            )
            .route_layer(middleware::from_fn(metrics::track_metrics))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .layer(limits::body_limit(&config.security))
            .with_state(state);

        // Paths are rewritten before the inner router matches them.
        let normalized = ServiceBuilder::new()
            .layer(path::trim_trailing_slash_layer())
            .layer(middleware::from_fn(path::fold_route_case))
            .service(routes);
        let mut router = Router::new().fallback_service(normalized);

        if config.security.cors_enabled {
            router = router.layer(headers::cors_layer());
        }
        if config.security.enable_headers {
            router = headers::with_security_headers(router);
        }

        router.layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(propagate_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id(request),
                    )
                }))
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        )
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight
    /// requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            users = self.users.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn users(&self) -> &Arc<UserService> {
        &self.users
    }
}
