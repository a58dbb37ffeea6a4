//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use tokio::net::TcpListener;
use users_api::config::ServiceConfig;
use users_api::http::HttpServer;
use users_api::lifecycle::Shutdown;

/// A server running on an ephemeral localhost port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start a server with the default (seeded) configuration.
pub async fn start_server() -> TestServer {
    start_server_with(ServiceConfig::default()).await
}

pub async fn start_server_with(mut config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let rx = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, rx).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
